//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `USER_SERVICE_*` environment variables, configuration
//! files, and command-line flags, with defaults for everything except the
//! database URL.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ReconnectPolicy;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RECONNECT_INTERVAL_MS: u64 = 2_000;
const DEFAULT_POOL_MAX_SIZE: u32 = PoolConfig::DEFAULT_MAX_SIZE;

/// Runtime settings for the HTTP service and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServiceSettings {
    /// PostgreSQL connection URL. When absent the in-memory store is used.
    pub database_url: Option<String>,
    /// TCP port the HTTP listener binds on all interfaces.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Delay between store connection attempts, in milliseconds.
    #[ortho_config(default = 2000)]
    pub reconnect_interval_ms: u64,
    /// Give up after this many attempts. Unbounded when absent.
    pub reconnect_max_attempts: Option<u32>,
    /// Maximum pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            reconnect_interval_ms: DEFAULT_RECONNECT_INTERVAL_MS,
            reconnect_max_attempts: None,
            pool_max_size: DEFAULT_POOL_MAX_SIZE,
        }
    }
}

impl ServiceSettings {
    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Reconnect loop policy derived from the interval and attempt cap.
    pub fn reconnect_policy(&self) -> ReconnectPolicy {
        ReconnectPolicy::new(
            Duration::from_millis(self.reconnect_interval_ms),
            self.reconnect_max_attempts,
        )
    }

    /// Pool settings when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| PoolConfig::new(url).with_max_size(self.pool_max_size))
    }
}
