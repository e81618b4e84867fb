//! Driving port for reading order histories.

use async_trait::async_trait;

use crate::domain::{Error, OrderHistory, UserName};

/// Domain use-case port for fetching order histories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderHistoryQuery: Send + Sync {
    /// Fetch the history for `name`, failing with `not_found` when absent.
    async fn get_history(&self, name: &UserName) -> Result<OrderHistory, Error>;
}
