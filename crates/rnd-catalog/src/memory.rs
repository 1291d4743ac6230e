use std::collections::HashMap;

use async_trait::async_trait;
use rnd_core::LanguageId;

use crate::{CatalogError, ErrorCatalog};

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: HashMap<(String, LanguageId), String>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, language: LanguageId, message: impl Into<String>) -> Self {
        self.insert(key, language, message);
        self
    }

    /// Add or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, language: LanguageId, message: impl Into<String>) {
        self.entries.insert((key.into(), language), message.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, M> FromIterator<(K, LanguageId, M)> for MemoryCatalog
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, LanguageId, M)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, language, message) in iter {
            catalog.insert(key, language, message);
        }
        catalog
    }
}

#[async_trait]
impl ErrorCatalog for MemoryCatalog {
    async fn lookup(&self, key: &str, language: LanguageId) -> Result<String, CatalogError> {
        self.entries
            .get(&(key.to_owned(), language))
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                key: key.to_owned(),
                language,
            })
    }
}
