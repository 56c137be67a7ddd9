//! # Telemetry
//!
//! Tracing subscriber setup for the binary.

use crate::infrastructure::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. Calling this more than once is a
/// no-op.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
