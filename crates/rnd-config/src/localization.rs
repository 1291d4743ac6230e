use indexmap::IndexMap;
use rnd_core::LanguageId;
use serde::Deserialize;

/// Error-message localization settings
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizationConfig {
    /// Catalog language used when a request does not name one
    #[serde(default)]
    pub default_language_id: LanguageId,
    /// Locale code of the default language, `en` when unset
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Extra column-to-token entries for duplicate-entry messages
    #[serde(default)]
    pub duplicate_keys: IndexMap<String, String>,
}
