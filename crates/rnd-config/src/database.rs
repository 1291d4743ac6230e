use secrecy::SecretString;
use serde::Deserialize;

/// Connection settings for the error catalog database
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. `sqlite://errors.db`)
    #[serde(default = "default_url")]
    pub url: SecretString,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Create the `error_messages` table on startup when missing
    #[serde(default)]
    pub migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            migrate: false,
        }
    }
}

fn default_url() -> SecretString {
    SecretString::from("sqlite://errors.db")
}

const fn default_max_connections() -> u32 {
    5
}
