//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use name_chain::db::DatabaseConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 6969);

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Where game states are kept
    pub store: StoreConfig,
    /// Prometheus exporter address, if metrics are enabled
    pub metrics_bind: Option<SocketAddr>,
}

/// Session store selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Keep games in process memory; lost on restart
    Memory,
    /// Keep games in PostgreSQL
    Postgres(DatabaseConfig),
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `database_url_override` - Optional database URL override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but can't be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        database_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => parse_optional_env("SERVER_BIND")?.unwrap_or(DEFAULT_BIND),
        };

        let store = match database_url_override.or_else(|| std::env::var("DATABASE_URL").ok()) {
            Some(database_url) => {
                let defaults = DatabaseConfig::with_url(database_url);
                StoreConfig::Postgres(DatabaseConfig {
                    max_connections: parse_env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
                    min_connections: parse_env_or("DB_MIN_CONNECTIONS", defaults.min_connections),
                    connection_timeout_secs: parse_env_or(
                        "DB_CONNECTION_TIMEOUT_SECS",
                        defaults.connection_timeout_secs,
                    ),
                    idle_timeout_secs: parse_env_or(
                        "DB_IDLE_TIMEOUT_SECS",
                        defaults.idle_timeout_secs,
                    ),
                    max_lifetime_secs: parse_env_or(
                        "DB_MAX_LIFETIME_SECS",
                        defaults.max_lifetime_secs,
                    ),
                    ..defaults
                })
            }
            None => StoreConfig::Memory,
        };

        let metrics_bind = parse_optional_env("METRICS_BIND")?;

        Ok(ServerConfig {
            bind,
            store,
            metrics_bind,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let StoreConfig::Postgres(database) = &self.store {
            if database.database_url.is_empty() {
                return Err(ConfigError::Invalid {
                    var: "DATABASE_URL".to_string(),
                    reason: "Must not be empty".to_string(),
                });
            }

            if database.max_connections == 0 {
                return Err(ConfigError::Invalid {
                    var: "DB_MAX_CONNECTIONS".to_string(),
                    reason: "Must be greater than 0".to_string(),
                });
            }

            if database.min_connections > database.max_connections {
                return Err(ConfigError::Invalid {
                    var: "DB_MIN_CONNECTIONS".to_string(),
                    reason: format!(
                        "Cannot exceed max connections ({})",
                        database.max_connections
                    ),
                });
            }
        }

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from the server address ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse an environment variable that may be unset, but must be valid when set
fn parse_optional_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map(Some).map_err(|e: T::Err| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}
