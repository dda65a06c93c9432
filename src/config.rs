//! Process configuration read from the environment (optionally seeded from a `.env` file).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SLOW_QUERY_THRESHOLD_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    /// Single origin allowed to make credentialed cross-origin requests.
    pub frontend_host: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub slow_query_threshold: Duration,
}

impl Settings {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL")
            .or_else(|| get("DSN"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let frontend_host = get("FRONTEND_HOST")
            .or_else(|| get("frontEndHost"))
            .ok_or(ConfigError::Missing("FRONTEND_HOST"))?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: format!("expected a positive integer, got '{}'", v),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let slow_ms = match get("SLOW_QUERY_THRESHOLD_MS") {
            Some(v) => v.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "SLOW_QUERY_THRESHOLD_MS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_SLOW_QUERY_THRESHOLD_MS,
        };

        Ok(Settings {
            database_url,
            frontend_host,
            bind_addr,
            max_connections,
            slow_query_threshold: Duration::from_millis(slow_ms),
        })
    }
}
