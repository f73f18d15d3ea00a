//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Journal web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Session lifetime.
    pub session_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `JOURNAL_ADDR` | Server bind address | `127.0.0.1:8090` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:manasaroha.db?mode=rwc` |
    /// | `SESSION_TTL_SECS` | Session lifetime in seconds | `86400` |
    ///
    /// The analyzer backend reads its own `MOOD_API_*` variables; see
    /// `mood_gateway::GatewayConfig::from_env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("JOURNAL_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8090".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:manasaroha.db?mode=rwc".to_string());

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        Ok(Self {
            addr,
            database_url,
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid JOURNAL_ADDR format")]
    InvalidAddr,
}
