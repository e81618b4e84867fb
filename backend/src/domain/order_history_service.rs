//! Order history use-cases.
//!
//! Orders are appended with a single store-side operation per order. Two
//! concurrent submissions for the same user both land in the history; their
//! relative order is whichever the store applied first.

use async_trait::async_trait;
use tracing::error;

use crate::domain::account_service::map_user_persistence_error;
use crate::domain::ports::{OrderHistoryCommand, OrderHistoryPersistenceError, OrderHistoryQuery};
use crate::domain::{AvailabilityGate, Error, Order, OrderHistory, UserName};

/// Order history service implementing the order driving ports.
#[derive(Debug, Clone)]
pub struct OrderHistoryService {
    gate: AvailabilityGate,
}

fn map_order_persistence_error(err: OrderHistoryPersistenceError) -> Error {
    error!(error = %err, "order history store operation failed");
    Error::internal(err.to_string())
}

impl OrderHistoryService {
    /// Create a service gated on `gate`.
    pub fn new(gate: AvailabilityGate) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl OrderHistoryCommand for OrderHistoryService {
    async fn submit_order(&self, name: &UserName, order: Order) -> Result<(), Error> {
        self.gate
            .guard(|store| async move {
                let registered = store
                    .users
                    .exists(name)
                    .await
                    .map_err(map_user_persistence_error)?;
                if !registered {
                    return Err(Error::not_found(format!("user not found: {name}")));
                }
                store
                    .orders
                    .append(name, &order)
                    .await
                    .map_err(map_order_persistence_error)
            })
            .await
    }
}

#[async_trait]
impl OrderHistoryQuery for OrderHistoryService {
    async fn get_history(&self, name: &UserName) -> Result<OrderHistory, Error> {
        self.gate
            .guard(|store| async move {
                store
                    .orders
                    .find_by_name(name)
                    .await
                    .map_err(map_order_persistence_error)?
                    .ok_or_else(|| Error::not_found(format!("no order history for {name}")))
            })
            .await
    }
}

#[cfg(test)]
mod tests;
