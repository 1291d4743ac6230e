use rnd_catalog::CatalogError;
use rnd_core::LanguageId;
use thiserror::Error;

use crate::FormatError;

/// Formatter construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No catalog handed to the builder
    #[error("error catalog is not configured")]
    MissingCatalog,

    /// Default language id is zero or negative
    #[error("default language id must be positive, got {0}")]
    InvalidDefaultLanguage(LanguageId),
}

/// Catalog lookup that produced no message
#[derive(Debug, Error)]
#[error("no localized message for '{slug}' in language {language}")]
pub struct CatalogMiss {
    pub slug: String,
    /// Language actually queried, after default substitution
    pub language: LanguageId,
    #[source]
    pub source: CatalogError,
}

/// Failure to produce an interpolated message
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Miss(#[from] CatalogMiss),

    #[error("failed to format localized message: {0}")]
    Format(#[from] FormatError),
}
