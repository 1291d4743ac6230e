use rnd_core::LanguageId;
use thiserror::Error;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No row for the key/language pair
    #[error("no catalog entry for '{key}' in language {language}")]
    NotFound { key: String, language: LanguageId },

    /// Storage connection or query error
    #[error("catalog backend: {0}")]
    Backend(String),
}

impl CatalogError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
