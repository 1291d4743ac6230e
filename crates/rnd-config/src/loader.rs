use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or parsing or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// Expands `{{ env.VAR }}` placeholders, then deserializes and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable expansion, TOML parsing or
    /// validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_localization()?;
        self.validate_database()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_localization(&self) -> anyhow::Result<()> {
        let localization = &self.localization;

        if localization.default_language_id.get() <= 0 {
            anyhow::bail!("localization.default_language_id must be a positive catalog language id");
        }

        for (column, token) in &localization.duplicate_keys {
            if column.trim().is_empty() || token.trim().is_empty() {
                anyhow::bail!("localization.duplicate_keys entries must have a non-empty column and token");
            }
        }

        Ok(())
    }

    fn validate_database(&self) -> anyhow::Result<()> {
        if self.database.url.expose_secret().trim().is_empty() {
            anyhow::bail!("database.url must not be empty");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be greater than 0");
        }

        // Each connection to an in-memory database sees its own empty database
        let url = self.database.url.expose_secret();
        if (url.contains(":memory:") || url.contains("mode=memory")) && self.database.max_connections > 1 {
            anyhow::bail!("database.max_connections must be 1 for an in-memory SQLite database");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
