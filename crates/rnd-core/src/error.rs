use std::borrow::Cow;

use http::StatusCode;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Status code for any identity without a dedicated entry in the table
pub const DEFAULT_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Error identities with a dedicated HTTP status code
///
/// The string form of each variant is its slug: the catalog lookup key and
/// the `error_slug` field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum KnownError {
    /// Last-resort failure; also the identity every catalog miss is rewritten to
    #[strum(serialize = "generic_err")]
    Generic,
    #[strum(serialize = "record_not_found")]
    RecordNotFound,
    #[strum(serialize = "unauthorized")]
    Unauthorized,
}

impl KnownError {
    /// Wire slug of this identity
    pub fn slug(self) -> &'static str {
        self.into()
    }

    /// Parse a slug into a known identity
    pub fn from_slug(slug: &str) -> Option<Self> {
        slug.parse().ok()
    }

    /// HTTP status code assigned to this identity
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Generic => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Status code for an arbitrary slug, falling back to [`DEFAULT_STATUS`]
    pub fn status_for_slug(slug: &str) -> StatusCode {
        Self::from_slug(slug).map_or(DEFAULT_STATUS, Self::status_code)
    }
}

/// Domain error that can be rendered as a localized HTTP error
///
/// Implemented by service error enums so they can be handed to the
/// response formatter directly. The slug doubles as the catalog key.
pub trait LocalizedError: std::error::Error {
    /// Machine-readable identity (e.g. `record_not_found`)
    fn slug(&self) -> &str;

    /// Known identity behind this error, if any
    fn known(&self) -> Option<KnownError> {
        KnownError::from_slug(self.slug())
    }
}

/// Ready-made domain error: one of the known identities or a free-form slug
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Known(KnownError),
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl DomainError {
    /// Build from a slug, recognizing the known identities
    pub fn from_slug(slug: impl Into<Cow<'static, str>>) -> Self {
        let slug = slug.into();
        match KnownError::from_slug(&slug) {
            Some(known) => Self::Known(known),
            None => Self::Custom(slug),
        }
    }

    pub const fn generic() -> Self {
        Self::Known(KnownError::Generic)
    }

    pub const fn record_not_found() -> Self {
        Self::Known(KnownError::RecordNotFound)
    }

    pub const fn unauthorized() -> Self {
        Self::Known(KnownError::Unauthorized)
    }
}

impl From<KnownError> for DomainError {
    fn from(known: KnownError) -> Self {
        Self::Known(known)
    }
}

impl LocalizedError for DomainError {
    fn slug(&self) -> &str {
        match self {
            Self::Known(known) => known.slug(),
            Self::Custom(slug) => slug.as_ref(),
        }
    }

    fn known(&self) -> Option<KnownError> {
        match self {
            Self::Known(known) => Some(*known),
            Self::Custom(_) => None,
        }
    }
}

impl LocalizedError for KnownError {
    fn slug(&self) -> &str {
        KnownError::slug(*self)
    }

    fn known(&self) -> Option<KnownError> {
        Some(*self)
    }
}

impl std::error::Error for KnownError {}
