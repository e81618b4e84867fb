//! Connects the store by building a pool and probing the server.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{StoreCollections, StoreConnectionError, StoreConnector};

use super::pool::{DbPool, PoolConfig, PoolError};
use super::{DieselOrderHistoryRepository, DieselUserRepository};

/// `StoreConnector` backed by PostgreSQL.
///
/// Each attempt builds a fresh pool. The pool from the successful attempt is
/// shared by both repositories.
#[derive(Debug, Clone)]
pub struct DieselStoreConnector {
    config: PoolConfig,
}

impl DieselStoreConnector {
    /// Create a connector for `config`.
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }
}

fn map_pool_error(error: PoolError) -> StoreConnectionError {
    match error {
        PoolError::Build { message } => StoreConnectionError::configuration(message),
        PoolError::Checkout { message } => StoreConnectionError::unreachable(message),
    }
}

#[async_trait]
impl StoreConnector for DieselStoreConnector {
    async fn connect(&self) -> Result<StoreCollections, StoreConnectionError> {
        let pool = DbPool::new(self.config.clone())
            .await
            .map_err(map_pool_error)?;
        pool.ping().await.map_err(map_pool_error)?;

        Ok(StoreCollections::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselOrderHistoryRepository::new(pool)),
        ))
    }
}
