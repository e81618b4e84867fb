//! Sleep port used between reconnect attempts.

use std::time::Duration;

use async_trait::async_trait;

/// Waits out the delay between reconnect attempts.
#[async_trait]
pub trait ReconnectSleeper: Send + Sync {
    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl ReconnectSleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
