//! Service configuration with validation and environment overrides.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Filter sizing configuration
    pub filter: FilterConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8081)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8081,
        }
    }
}

/// Filter sizing configuration, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Expected number of distinct items
    pub expected_items: usize,
    /// Target false-positive rate, in (0, 1)
    pub false_positive_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            false_positive_rate: 0.01,
        }
    }
}

impl AppConfig {
    /// Validate configuration before the service starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.filter.expected_items == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let rate = self.filter.false_positive_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(ConfigError::InvalidRate(rate));
        }
        Ok(())
    }

    /// HTTP server bind address.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Defaults overridden by `BLOOMGATE_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("BLOOMGATE_HOST") {
            match host.parse() {
                Ok(h) => config.http.host = h,
                Err(_) => warn!(value = %host, "ignoring unparseable BLOOMGATE_HOST"),
            }
        }
        if let Ok(port) = std::env::var("BLOOMGATE_PORT") {
            match port.parse() {
                Ok(p) => config.http.port = p,
                Err(_) => warn!(value = %port, "ignoring unparseable BLOOMGATE_PORT"),
            }
        }
        if let Ok(items) = std::env::var("BLOOMGATE_EXPECTED_ITEMS") {
            match items.parse() {
                Ok(n) => config.filter.expected_items = n,
                Err(_) => warn!(value = %items, "ignoring unparseable BLOOMGATE_EXPECTED_ITEMS"),
            }
        }
        if let Ok(rate) = std::env::var("BLOOMGATE_FPR") {
            match rate.parse() {
                Ok(r) => config.filter.false_positive_rate = r,
                Err(_) => warn!(value = %rate, "ignoring unparseable BLOOMGATE_FPR"),
            }
        }

        config
    }
}
