//! Configuration management for DogHouse.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Main configuration for the DogHouse service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogHouseConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limiting: RateLimitingConfig,
}

impl Default for DogHouseConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            rate_limiting: RateLimitingConfig::default(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    "127.0.0.1:8080".parse().unwrap()
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitingConfig {
    /// Maximum admissions per rolling window
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: usize,

    /// Window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for RateLimitingConfig {
    fn default() -> Self {
        Self {
            requests_per_window: default_requests_per_window(),
            window_ms: default_window_ms(),
        }
    }
}

fn default_requests_per_window() -> usize {
    100
}

fn default_window_ms() -> u64 {
    1000
}

impl RateLimitingConfig {
    /// Window length as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

impl DogHouseConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: &str) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: DogHouseConfig = serde_yaml::from_str(&contents)
            .map_err(|e| crate::error::DogHouseError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// A non-positive limit or window would silently disable the limiter,
    /// so both are rejected before the service accepts any traffic.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.rate_limiting.requests_per_window == 0 {
            return Err(crate::error::DogHouseError::Config(
                "rate_limiting.requests_per_window must be positive".to_string(),
            ));
        }
        if self.rate_limiting.window_ms == 0 {
            return Err(crate::error::DogHouseError::Config(
                "rate_limiting.window_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
