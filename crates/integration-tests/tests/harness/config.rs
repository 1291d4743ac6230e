//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use rnd_config::{Config, DatabaseConfig, HealthConfig, LocalizationConfig, ServerConfig};
use rnd_core::LanguageId;
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with English (language 1) as the default
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                database: DatabaseConfig::default(),
                localization: LocalizationConfig {
                    default_language_id: LanguageId::new(1),
                    ..LocalizationConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Point the catalog at a SQLite database and create its table
    pub fn with_database(mut self, url: &str) -> Self {
        self.config.database.url = SecretString::from(url.to_owned());
        self.config.database.max_connections = 1;
        self.config.database.migrate = true;
        self
    }

    /// Change the language used when a request names none
    pub fn with_default_language(mut self, language: i64) -> Self {
        self.config.localization.default_language_id = LanguageId::new(language);
        self
    }

    /// Map a duplicate-key column to a message token
    pub fn with_duplicate_key(mut self, column: &str, token: &str) -> Self {
        self.config
            .localization
            .duplicate_keys
            .insert(column.to_owned(), token.to_owned());
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
