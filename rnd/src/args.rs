use std::path::PathBuf;

use clap::Parser;

/// Localized error response service
#[derive(Debug, Parser)]
#[command(name = "rnd", about = "Serves localized JSON error envelopes from an error catalog")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "rnd.toml", env = "RND_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "RND_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
