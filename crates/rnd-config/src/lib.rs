#![allow(clippy::must_use_candidate)]

pub mod database;
mod env;
mod loader;
pub mod localization;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use database::*;
pub use localization::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error catalog storage
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Default language and duplicate-key tokens
    #[serde(default)]
    pub localization: LocalizationConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
