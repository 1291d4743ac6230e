use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use axum::http::StatusCode;
use rnd_catalog::ErrorCatalog;
use rnd_core::{DEFAULT_STATUS, KnownError, LanguageId, LocalizedError};

use crate::{
    ConfigError, DUPLICATE_ENTRY, ErrorReply, FormatArg, Reply, ResponseEnvelope,
    duplicate::{default_duplicate_keys, duplicate_entry_message},
    error::{CatalogMiss, ResolveError},
    format::sprintf,
};

const DEFAULT_LOCALE: &str = "en";

/// Pick the status code for an error response
///
/// A failed catalog lookup always escalates to 500, ahead of the status
/// table; otherwise known identities use their table entry and everything
/// else is a 400.
pub fn select_status(resolved: bool, known: Option<KnownError>) -> StatusCode {
    if !resolved {
        return KnownError::Generic.status_code();
    }
    known.map_or(DEFAULT_STATUS, KnownError::status_code)
}

/// Translates domain errors into localized HTTP error envelopes
///
/// Immutable after construction; share it between handlers behind an `Arc`.
#[derive(Clone)]
pub struct ResponseFormatter {
    catalog: Arc<dyn ErrorCatalog>,
    default_language: LanguageId,
    default_locale: String,
    duplicate_keys: HashMap<String, String>,
}

impl fmt::Debug for ResponseFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseFormatter")
            .field("default_language", &self.default_language)
            .field("default_locale", &self.default_locale)
            .field("duplicate_keys", &self.duplicate_keys)
            .finish_non_exhaustive()
    }
}

impl ResponseFormatter {
    pub fn builder() -> ResponseFormatterBuilder {
        ResponseFormatterBuilder::new()
    }

    /// Build a formatter with the default duplicate-key mapping
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDefaultLanguage`] when
    /// `default_language` is not positive
    pub fn new(
        catalog: Arc<dyn ErrorCatalog>,
        default_language: LanguageId,
        default_locale: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().catalog(catalog).default_language(default_language);
        if let Some(locale) = default_locale {
            builder = builder.default_locale(locale);
        }
        builder.build()
    }

    pub const fn default_language(&self) -> LanguageId {
        self.default_language
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub const fn duplicate_keys(&self) -> &HashMap<String, String> {
        &self.duplicate_keys
    }

    /// Look up the localized message for `slug`
    ///
    /// An unset language falls back to the default language. Misses and
    /// storage failures are both reported as [`CatalogMiss`].
    pub async fn resolve_message(&self, slug: &str, language: LanguageId) -> Result<String, CatalogMiss> {
        let language = language.or(self.default_language);

        match self.catalog.lookup(slug, language).await {
            Ok(message) => Ok(message),
            Err(source) => {
                if source.is_not_found() {
                    tracing::debug!(slug, %language, "no catalog entry");
                } else {
                    tracing::warn!(slug, %language, error = %source, "catalog lookup failed");
                }
                Err(CatalogMiss {
                    slug: slug.to_owned(),
                    language,
                    source,
                })
            }
        }
    }

    /// Localized text of the generic error, or an empty string
    pub async fn resolve_generic_message(&self, language: LanguageId) -> String {
        self.resolve_message(KnownError::Generic.slug(), language)
            .await
            .unwrap_or_default()
    }

    /// Look up the template for `slug` and interpolate `values` into it
    pub async fn resolve_formatted_message(
        &self,
        slug: &str,
        language: LanguageId,
        values: &[FormatArg],
    ) -> Result<String, ResolveError> {
        let template = self.resolve_message(slug, language).await?;
        Ok(sprintf(&template, values)?)
    }

    /// Render `err` as a localized error response
    ///
    /// A catalog miss turns into a 500 carrying the generic message and the
    /// `generic_err` slug, whatever the original identity was.
    pub async fn emit_error<E>(&self, err: &E, language: LanguageId) -> ErrorReply
    where
        E: LocalizedError + Sync + ?Sized,
    {
        let resolved = self.resolve_message(err.slug(), language).await.ok();
        self.error_reply(err, language, resolved).await
    }

    /// Like [`emit_error`](Self::emit_error), interpolating `values` into the message
    ///
    /// A template that cannot be formatted with `values` is handled like a
    /// catalog miss.
    pub async fn emit_error_formatted<E>(&self, err: &E, language: LanguageId, values: &[FormatArg]) -> ErrorReply
    where
        E: LocalizedError + Sync + ?Sized,
    {
        let resolved = match self.resolve_formatted_message(err.slug(), language, values).await {
            Ok(message) => Some(message),
            Err(ResolveError::Miss(_)) => None,
            Err(ResolveError::Format(e)) => {
                tracing::warn!(slug = err.slug(), error = %e, "localized message does not fit its values");
                None
            }
        };
        self.error_reply(err, language, resolved).await
    }

    /// Localized 401 response
    ///
    /// The status stays 401 on a catalog miss; only the message and slug
    /// fall back to the generic error.
    pub async fn emit_unauthorized<E>(&self, err: &E, language: LanguageId) -> ErrorReply
    where
        E: LocalizedError + Sync + ?Sized,
    {
        let status = StatusCode::UNAUTHORIZED;
        match self.resolve_message(err.slug(), language).await {
            Ok(message) => Reply::new(status, ResponseEnvelope::error(status, message, Some(err.slug().to_owned()))),
            Err(_) => {
                let message = self.resolve_generic_message(language).await;
                Reply::new(
                    status,
                    ResponseEnvelope::error(status, message, Some(KnownError::Generic.slug().to_owned())),
                )
            }
        }
    }

    /// 400 response naming the column behind a unique-constraint violation
    ///
    /// Text without a recognizable column yields the bare
    /// `ERR_DUPLICATE_ENTRY` message.
    pub fn emit_unique_violation(&self, text: &str) -> ErrorReply {
        let message = duplicate_entry_message(text, &self.duplicate_keys).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unrecognized duplicate key error");
            DUPLICATE_ENTRY.to_owned()
        });

        let status = StatusCode::BAD_REQUEST;
        Reply::new(status, ResponseEnvelope::message(status, message))
    }

    async fn error_reply<E>(&self, err: &E, language: LanguageId, resolved: Option<String>) -> ErrorReply
    where
        E: LocalizedError + Sync + ?Sized,
    {
        let status = select_status(resolved.is_some(), err.known());

        let (message, slug) = match resolved {
            Some(message) => (message, err.slug()),
            None => (
                self.resolve_generic_message(language).await,
                KnownError::Generic.slug(),
            ),
        };

        tracing::debug!(slug, status = status.as_u16(), "emitting error response");

        Reply::new(status, ResponseEnvelope::error(status, message, Some(slug.to_owned())))
    }
}

/// Builder for [`ResponseFormatter`]
pub struct ResponseFormatterBuilder {
    catalog: Option<Arc<dyn ErrorCatalog>>,
    default_language: LanguageId,
    default_locale: Option<String>,
    duplicate_keys: HashMap<String, String>,
}

impl Default for ResponseFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatterBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            default_language: LanguageId::UNSET,
            default_locale: None,
            duplicate_keys: default_duplicate_keys(),
        }
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Arc<dyn ErrorCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    #[must_use]
    pub fn default_language(mut self, language: LanguageId) -> Self {
        self.default_language = language;
        self
    }

    /// Locale code of the default language; empty means `en`
    #[must_use]
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Map a storage column name to the token used in duplicate-entry messages
    #[must_use]
    pub fn duplicate_key(mut self, column: impl Into<String>, token: impl Into<String>) -> Self {
        self.duplicate_keys.insert(column.into(), token.into());
        self
    }

    /// Validate and build
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCatalog`] without a catalog and
    /// [`ConfigError::InvalidDefaultLanguage`] for a non-positive default
    /// language id
    pub fn build(self) -> Result<ResponseFormatter, ConfigError> {
        let catalog = self.catalog.ok_or(ConfigError::MissingCatalog)?;

        if self.default_language.get() <= 0 {
            return Err(ConfigError::InvalidDefaultLanguage(self.default_language));
        }

        let default_locale = match self.default_locale {
            Some(locale) if !locale.trim().is_empty() => locale.trim().to_lowercase(),
            _ => DEFAULT_LOCALE.to_owned(),
        };

        Ok(ResponseFormatter {
            catalog,
            default_language: self.default_language,
            default_locale,
            duplicate_keys: self.duplicate_keys,
        })
    }
}
