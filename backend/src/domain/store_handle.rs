//! Durable store connection lifecycle.
//!
//! [`StoreHandle`] starts disconnected. A background reconnect loop calls the
//! [`StoreConnector`] until one attempt succeeds, sleeping a fixed interval
//! between attempts. Once connected the collection handles never change and
//! the handle never reports disconnected again for the life of the process.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

use super::ports::{ReconnectSleeper, StoreCollections, StoreConnectionError, StoreConnector};

/// Whether the durable store is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection has succeeded yet.
    Disconnected,
    /// Collection handles are available.
    Connected,
}

/// Fixed-interval retry policy for the reconnect loop.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use user_service::domain::ReconnectPolicy;
///
/// let policy = ReconnectPolicy::default();
/// assert_eq!(policy.interval(), Duration::from_millis(2000));
/// assert_eq!(policy.max_attempts(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    interval: Duration,
    max_attempts: Option<u32>,
}

impl ReconnectPolicy {
    /// Delay between attempts when none is configured.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

    /// Build a policy. `None` retries forever.
    pub fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Delay between consecutive attempts.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Attempt limit, if any.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL, None)
    }
}

/// How the reconnect loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconnectOutcome {
    /// The store is connected. `attempts` counts connect calls made by this
    /// loop, zero when the handle was already connected.
    Connected { attempts: u32 },
    /// The attempt limit was reached without a successful connect.
    GaveUp { attempts: u32 },
}

/// Owner of the store connection state and collection handles.
#[derive(Debug, Default)]
pub struct StoreHandle {
    collections: OnceLock<StoreCollections>,
}

impl StoreHandle {
    /// A handle in the [`ConnectionState::Disconnected`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle already connected to `collections`.
    pub fn connected(collections: StoreCollections) -> Self {
        let handle = Self::new();
        handle.install(collections);
        handle
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        if self.collections.get().is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Shorthand for `state() == Connected`.
    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Collection handles, once connected.
    pub fn collections(&self) -> Option<StoreCollections> {
        self.collections.get().cloned()
    }

    /// Make a single connection attempt.
    ///
    /// On success the collection handles are installed and the state becomes
    /// connected. On failure the state is left untouched.
    pub async fn connect(&self, connector: &dyn StoreConnector) -> Result<(), StoreConnectionError> {
        let collections = connector.connect().await?;
        self.install(collections);
        Ok(())
    }

    fn install(&self, collections: StoreCollections) {
        if self.collections.set(collections).is_err() {
            warn!("store already connected; keeping existing collection handles");
        }
    }

    /// Retry [`StoreHandle::connect`] until it succeeds or the policy gives up.
    pub async fn run_reconnect_loop(
        &self,
        connector: &dyn StoreConnector,
        sleeper: &dyn ReconnectSleeper,
        policy: ReconnectPolicy,
    ) -> ReconnectOutcome {
        if self.is_connected() {
            return ReconnectOutcome::Connected { attempts: 0 };
        }

        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            match self.connect(connector).await {
                Ok(()) => {
                    info!(attempts, "connected to store");
                    return ReconnectOutcome::Connected { attempts };
                }
                Err(err) if policy.exhausted(attempts) => {
                    error!(attempts, error = %err, "store connection failed; giving up");
                    return ReconnectOutcome::GaveUp { attempts };
                }
                Err(err) => {
                    let retry_in_ms = u64::try_from(policy.interval().as_millis()).unwrap_or(u64::MAX);
                    error!(attempts, retry_in_ms, error = %err, "store connection failed; retrying");
                    sleeper.sleep(policy.interval()).await;
                }
            }
        }
    }

    /// Run the reconnect loop as a background task.
    pub fn spawn_reconnect(
        self: &Arc<Self>,
        connector: Arc<dyn StoreConnector>,
        sleeper: Arc<dyn ReconnectSleeper>,
        policy: ReconnectPolicy,
    ) -> ReconnectTask {
        let handle = Arc::clone(self);
        let join = tokio::spawn(async move {
            handle
                .run_reconnect_loop(connector.as_ref(), sleeper.as_ref(), policy)
                .await
        });
        ReconnectTask { join }
    }
}

/// Handle to a spawned reconnect loop.
#[derive(Debug)]
pub struct ReconnectTask {
    join: JoinHandle<ReconnectOutcome>,
}

impl ReconnectTask {
    /// Abort the loop. A connection already installed stays installed.
    pub fn cancel(self) {
        self.join.abort();
    }

    /// Whether the loop has stopped.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the loop to end.
    pub async fn join(self) -> Result<ReconnectOutcome, JoinError> {
        self.join.await
    }
}
