//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use user_service::domain::ReconnectPolicy;
use user_service::domain::ports::StoreConnector;

/// Everything needed to start the listener and the store reconnect loop.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connector: Arc<dyn StoreConnector>,
    pub(crate) reconnect_policy: ReconnectPolicy,
}

impl ServerConfig {
    /// Bind to `bind_addr` and reach the store through `connector`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, connector: Arc<dyn StoreConnector>) -> Self {
        Self {
            bind_addr,
            connector,
            reconnect_policy: ReconnectPolicy::default(),
        }
    }

    /// Override the reconnect interval and attempt cap.
    #[must_use]
    pub fn with_reconnect_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.reconnect_policy = policy;
        self
    }
}
