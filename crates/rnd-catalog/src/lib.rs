//! Localized error-message catalog
//!
//! Resolves `(error key, language id)` pairs to message templates. The
//! production backend reads the `error_messages` table through `sqlx`; the
//! in-memory backend serves tests and embedded setups.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod error;
mod memory;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use rnd_core::LanguageId;

pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use sqlite::SqliteCatalog;

/// Lookup contract for localized error messages
///
/// Implementations must be safe to share between concurrently handled
/// requests. When several rows match, the first one wins.
#[async_trait]
pub trait ErrorCatalog: Send + Sync {
    /// Fetch the message template stored for `key` in `language`
    async fn lookup(&self, key: &str, language: LanguageId) -> Result<String, CatalogError>;
}

#[async_trait]
impl<T: ErrorCatalog + ?Sized> ErrorCatalog for Arc<T> {
    async fn lookup(&self, key: &str, language: LanguageId) -> Result<String, CatalogError> {
        (**self).lookup(key, language).await
    }
}
