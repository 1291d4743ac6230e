use std::collections::HashMap;

use thiserror::Error;

/// Message prefix for unique-constraint violations
pub const DUPLICATE_ENTRY: &str = "ERR_DUPLICATE_ENTRY";

/// Duplicate-key error text without a recognizable column name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no column name in duplicate key error text: {text:?}")]
pub struct MalformedDuplicateKeyText {
    pub text: String,
}

/// Column-to-token mapping applied when none is configured
pub fn default_duplicate_keys() -> HashMap<String, String> {
    [("user_email", "EMAIL"), ("user_steam_id", "STEAM_ID")]
        .into_iter()
        .map(|(column, token)| (column.to_owned(), token.to_owned()))
        .collect()
}

/// Extract the column name from a storage engine's duplicate-key detail
///
/// Expects the Postgres shape `Key (column)=(value) already exists.` and
/// returns the text between the first `(` and the following `)`.
pub fn duplicate_column(text: &str) -> Result<&str, MalformedDuplicateKeyText> {
    let malformed = || MalformedDuplicateKeyText { text: text.to_owned() };

    let (_, rest) = text.split_once('(').ok_or_else(malformed)?;
    let (column, _) = rest.split_once(')').ok_or_else(malformed)?;
    let column = column.trim();

    if column.is_empty() || column.contains('(') {
        return Err(malformed());
    }

    Ok(column)
}

/// Build `ERR_DUPLICATE_ENTRY_<TOKEN>` for a duplicate-key detail
///
/// Columns found in `keys` use the mapped token; others are uppercased.
pub fn duplicate_entry_message(text: &str, keys: &HashMap<String, String>) -> Result<String, MalformedDuplicateKeyText> {
    let column = duplicate_column(text)?;
    let token = keys.get(column).cloned().unwrap_or_else(|| column.to_uppercase());
    Ok(format!("{DUPLICATE_ENTRY}_{token}"))
}
