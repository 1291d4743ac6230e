//! Shared types for localized HTTP error envelopes
//!
//! Domain error identities, their status-code table and the language id
//! carried through catalog lookups.

#![allow(clippy::must_use_candidate)]

mod error;
mod headers;
mod language;

pub use error::{DEFAULT_STATUS, DomainError, KnownError, LocalizedError};
pub use headers::{LANGUAGE_ID_HEADER, language_from_headers};
pub use language::LanguageId;
