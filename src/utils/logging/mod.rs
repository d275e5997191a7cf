//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{DashboardError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, the configured level is the fallback
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| DashboardError::config(format!("Invalid log level {}: {}", config.level, e))),
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| DashboardError::internal(format!("Failed to install tracing subscriber: {}", e)))
}
