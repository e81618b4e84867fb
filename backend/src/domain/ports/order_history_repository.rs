//! Port abstraction for order history persistence.
use async_trait::async_trait;

use crate::domain::{Order, OrderHistory, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order history adapters.
    pub enum OrderHistoryPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "order history connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order history query failed: {message}",
    }
}

/// Store-backed access to per-user order histories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderHistoryRepository: Send + Sync {
    /// Fetch the history recorded for `name`, if any.
    async fn find_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<OrderHistory>, OrderHistoryPersistenceError>;

    /// Append `order` to the tail of the history for `name`.
    ///
    /// Creates the history with `[order]` when none exists. The append is a
    /// single store-side operation: concurrent appends for the same name
    /// never overwrite each other.
    async fn append(
        &self,
        name: &UserName,
        order: &Order,
    ) -> Result<(), OrderHistoryPersistenceError>;
}
