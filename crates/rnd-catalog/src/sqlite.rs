use std::str::FromStr;

use async_trait::async_trait;
use rnd_core::LanguageId;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{CatalogError, ErrorCatalog};

const LOOKUP: &str = r"
    SELECT error_message
    FROM error_messages
    WHERE error_key = $1 AND language_id = $2
    LIMIT 1
";

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS error_messages (
        error_key TEXT NOT NULL,
        language_id INTEGER NOT NULL,
        error_message TEXT NOT NULL,
        UNIQUE (error_key, language_id)
    )
";

const UPSERT: &str = r"
    INSERT INTO error_messages (error_key, language_id, error_message)
    VALUES ($1, $2, $3)
    ON CONFLICT (error_key, language_id) DO UPDATE SET error_message = excluded.error_message
";

/// Catalog backed by the `error_messages` table
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`, creating the database file when missing
    ///
    /// Every connection to `sqlite::memory:` opens its own database, so
    /// in-memory catalogs should use a single connection.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, CatalogError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::debug!(max_connections, "connected error catalog");

        Ok(Self::new(pool))
    }

    /// Create the `error_messages` table if it does not exist
    pub async fn migrate(&self) -> Result<(), CatalogError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert or replace the message for a key/language pair
    pub async fn upsert(&self, key: &str, language: LanguageId, message: &str) -> Result<(), CatalogError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(language.get())
            .bind(message)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ErrorCatalog for SqliteCatalog {
    async fn lookup(&self, key: &str, language: LanguageId) -> Result<String, CatalogError> {
        let message = sqlx::query_scalar::<_, String>(LOOKUP)
            .bind(key)
            .bind(language.get())
            .fetch_optional(&self.pool)
            .await?;

        message.ok_or_else(|| CatalogError::NotFound {
            key: key.to_owned(),
            language,
        })
    }
}
