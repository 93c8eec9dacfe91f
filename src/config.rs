//! Configuration Module
//!
//! Loads per-service configuration from environment variables. Every value
//! has a default so a bare `cargo run --bin <service>` works locally.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default port of the gateway.
pub const DEFAULT_GATEWAY_PORT: u16 = 8000;
/// Default port of the record server.
pub const DEFAULT_RECORD_PORT: u16 = 8001;
/// Default port of the cache server.
pub const DEFAULT_CACHE_PORT: u16 = 8002;
/// Timeout applied uniformly to every gateway -> downstream call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the record server
    pub database_service_url: String,
    /// Base URL of the cache server
    pub cache_service_url: String,
    /// Timeout in seconds for every downstream call
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Creates a new GatewayConfig from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `DATABASE_SERVICE_URL` - record server base URL (default: http://127.0.0.1:8001)
    /// - `CACHE_SERVICE_URL` - cache server base URL (default: http://127.0.0.1:8002)
    /// - `REQUEST_TIMEOUT_SECS` - downstream call timeout (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            database_service_url: env_or("DATABASE_SERVICE_URL", defaults.database_service_url),
            cache_service_url: env_or("CACHE_SERVICE_URL", defaults.cache_service_url),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_GATEWAY_PORT,
            database_service_url: format!("http://127.0.0.1:{}", DEFAULT_RECORD_PORT),
            cache_service_url: format!("http://127.0.0.1:{}", DEFAULT_CACHE_PORT),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Cache server configuration.
///
/// The flush threshold is deliberately absent: it is a constant of the
/// cache engine, see [`crate::cache::FLUSH_THRESHOLD_BYTES`].
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// HTTP server port
    pub server_port: u16,
}

impl CacheConfig {
    /// Creates a new CacheConfig from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8002)
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", DEFAULT_CACHE_PORT),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_CACHE_PORT,
        }
    }
}

/// Record server configuration.
#[derive(Debug, Clone)]
pub struct RecordConfig {
    /// HTTP server port
    pub server_port: u16,
    /// SQLite database file, or `:memory:`
    pub database_path: String,
}

impl RecordConfig {
    /// Creates a new RecordConfig from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8001)
    /// - `DATABASE_PATH` - SQLite file path (default: users.db)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            database_path: env_or("DATABASE_PATH", defaults.database_path),
        }
    }
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_RECORD_PORT,
            database_path: "users.db".to_string(),
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or
/// parse failure.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_default() {
        let config = GatewayConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.database_service_url, "http://127.0.0.1:8001");
        assert_eq!(config.cache_service_url, "http://127.0.0.1:8002");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_service_config_defaults() {
        assert_eq!(CacheConfig::default().server_port, 8002);

        let record = RecordConfig::default();
        assert_eq!(record.server_port, 8001);
        assert_eq!(record.database_path, "users.db");
    }

    #[test]
    fn test_env_or_parses_and_falls_back() {
        env::set_var("USER_TIER_TEST_PORT", "9123");
        assert_eq!(env_or("USER_TIER_TEST_PORT", 1u16), 9123);

        env::set_var("USER_TIER_TEST_PORT", "not-a-port");
        assert_eq!(env_or("USER_TIER_TEST_PORT", 1u16), 1);

        env::remove_var("USER_TIER_TEST_PORT");
        assert_eq!(env_or("USER_TIER_TEST_PORT", 7u16), 7);
    }
}
