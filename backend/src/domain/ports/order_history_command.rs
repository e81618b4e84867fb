//! Driving port for recording orders.

use async_trait::async_trait;

use crate::domain::{Error, Order, UserName};

/// Domain use-case port for appending orders to a user's history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderHistoryCommand: Send + Sync {
    /// Append `order` to the history of a registered user.
    ///
    /// Fails with `not_found` when `name` is not registered.
    async fn submit_order(&self, name: &UserName, order: Order) -> Result<(), Error>;
}
