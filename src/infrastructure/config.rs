//! # Configuration
//!
//! Layered application settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config` path, else `config/default.toml` if present)
//! 3. environment variables prefixed `PRICING__`, nested with `__`
//!    (e.g. `PRICING__SERVER__PORT=9090`)
//!
//! A `.env` file in the working directory is loaded first via `dotenvy`.
//!
//! # Examples
//!
//! ```
//! use price_resolver::infrastructure::config::{AppConfig, StoreBackend};
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [server]
//!     port = 9090
//!
//!     [store]
//!     backend = "memory"
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 9090);
//! assert_eq!(config.store.backend, StoreBackend::Memory);
//! ```

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PRICING";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Which price store adapter to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process store.
    Memory,
    /// PostgreSQL via sqlx.
    Postgres,
}

/// Price store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Adapter to use.
    pub backend: StoreBackend,
    /// Connection string, required for `postgres`.
    pub database_url: Option<String>,
    /// Pool size for `postgres`.
    pub max_connections: u32,
    /// Pool acquire timeout for `postgres`.
    pub acquire_timeout_ms: u64,
    /// Seed the `memory` store with the reference price list.
    pub seed_reference_prices: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: 10,
            acquire_timeout_ms: 3000,
            seed_reference_prices: true,
        }
    }
}

impl StoreConfig {
    /// Pool acquire timeout.
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }
}

/// Which notifier adapter to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierBackend {
    /// Structured log line per event.
    Log,
    /// NATS subject (requires the `nats` feature).
    Nats,
}

/// Notifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// When false, events are dropped.
    pub enabled: bool,
    /// Adapter to use.
    pub backend: NotifierBackend,
    /// Server URL for `nats`.
    pub nats_url: Option<String>,
    /// Subject for `nats`.
    pub subject: String,
    /// Upper bound on a single publish before it is abandoned.
    pub publish_timeout_ms: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: NotifierBackend::Log,
            nats_url: None,
            subject: "pricing.events".to_string(),
            publish_timeout_ms: 2000,
        }
    }
}

impl NotifierConfig {
    /// Publish timeout.
    #[must_use]
    pub fn publish_timeout(&self) -> Duration {
        Duration::from_millis(self.publish_timeout_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Price store.
    pub store: StoreConfig,
    /// Notifier.
    pub notifier: NotifierConfig,
    /// Logging.
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads `.env`, the optional file and environment overrides, then
    /// validates.
    ///
    /// An explicit `path` must exist; the default path is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read and
    /// `ConfigError::Invalid` if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is the normal case outside development.
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document on top of the defaults, then validates.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`].
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.backend == StoreBackend::Postgres
            && self.store.database_url.as_deref().is_none_or(str::is_empty)
        {
            return Err(ConfigError::invalid(
                "store.database_url is required for the postgres backend",
            ));
        }
        if self.store.max_connections == 0 {
            return Err(ConfigError::invalid("store.max_connections must be > 0"));
        }
        if self.notifier.publish_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "notifier.publish_timeout_ms must be > 0",
            ));
        }
        if self.notifier.enabled && self.notifier.backend == NotifierBackend::Nats {
            if !cfg!(feature = "nats") {
                return Err(ConfigError::invalid(
                    "notifier.backend = \"nats\" requires the `nats` feature",
                ));
            }
            if self.notifier.nats_url.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::invalid(
                    "notifier.nats_url is required for the nats backend",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.seed_reference_prices);
        assert_eq!(config.notifier.backend, NotifierBackend::Log);
        assert_eq!(config.notifier.publish_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [notifier]
            publish_timeout_ms = 150

            [log]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.notifier.publish_timeout_ms, 150);
        assert_eq!(config.notifier.subject, "pricing.events");
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = AppConfig::from_toml_str(
            r#"
            [store]
            backend = "postgres"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("database_url"));
    }

    #[test]
    fn postgres_with_url_is_valid() {
        let config = AppConfig::from_toml_str(
            r#"
            [store]
            backend = "postgres"
            database_url = "postgres://localhost/prices"
            max_connections = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.store.max_connections, 4);
    }

    #[test]
    fn zero_publish_timeout_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [notifier]
            publish_timeout_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn disabled_nats_notifier_needs_nothing() {
        let config = AppConfig::from_toml_str(
            r#"
            [notifier]
            enabled = false
            backend = "nats"
            "#,
        )
        .unwrap();
        assert!(!config.notifier.enabled);
    }

    #[test]
    fn unknown_backend_fails_to_load() {
        let err = AppConfig::from_toml_str(
            r#"
            [store]
            backend = "mongo"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn socket_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
        };
        assert_eq!(server.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
