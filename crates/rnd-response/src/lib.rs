//! Localized HTTP error responses
//!
//! [`ResponseFormatter`] turns domain errors into JSON envelopes whose text
//! comes from an error catalog, choosing the status code from the error's
//! identity. Replies implement [`axum::response::IntoResponse`], so handlers
//! return them directly, usually as the `Err` side of their result.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod duplicate;
mod envelope;
mod error;
pub mod format;
mod formatter;
pub mod legacy;

pub use duplicate::{
    DUPLICATE_ENTRY, MalformedDuplicateKeyText, default_duplicate_keys, duplicate_column, duplicate_entry_message,
};
pub use envelope::{ErrorReply, Payload, Reply, ResponseEnvelope, emit_created, emit_ok};
pub use error::{CatalogMiss, ConfigError, ResolveError};
pub use format::{FormatArg, FormatError};
pub use formatter::{ResponseFormatter, ResponseFormatterBuilder, select_status};
