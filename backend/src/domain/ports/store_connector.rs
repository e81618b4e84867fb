//! Port for establishing the durable store connection.
//!
//! A successful connect yields the two collection handles. The handles are
//! shared across requests for the life of the process.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::{OrderHistoryRepository, UserRepository, define_port_error};

define_port_error! {
    /// Errors raised while connecting to the store.
    pub enum StoreConnectionError {
        /// The store endpoint configuration is unusable.
        Configuration { message: String } => "store configuration invalid: {message}",
        /// The endpoint did not accept a connection.
        Unreachable { message: String } => "store unreachable: {message}",
    }
}

/// Collection handles available once the store is connected.
#[derive(Clone)]
pub struct StoreCollections {
    /// User records.
    pub users: Arc<dyn UserRepository>,
    /// Order history records.
    pub orders: Arc<dyn OrderHistoryRepository>,
}

impl StoreCollections {
    /// Bundle the collection handles.
    pub fn new(users: Arc<dyn UserRepository>, orders: Arc<dyn OrderHistoryRepository>) -> Self {
        Self { users, orders }
    }
}

impl fmt::Debug for StoreCollections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCollections").finish_non_exhaustive()
    }
}

/// Makes a single connection attempt against the configured store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Attempt one connection. No retry happens here.
    async fn connect(&self) -> Result<StoreCollections, StoreConnectionError>;
}
