//! CLI configuration.

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Local storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the JSON collections
    #[arg(long, env = "BRASSERIE_DATA_DIR", default_value = ".brasserie")]
    pub data_dir: PathBuf,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl LoggingConfig {
    /// Install the compact log subscriber. An explicit `RUST_LOG` filter
    /// takes precedence over the configured level.
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        _ = tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}
