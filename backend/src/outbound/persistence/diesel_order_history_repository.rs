//! PostgreSQL-backed `OrderHistoryRepository` implementation.
//!
//! `order_histories.history` is a JSONB array. Appends run as one
//! `INSERT .. ON CONFLICT DO UPDATE` statement that concatenates the new
//! order onto the stored array, so concurrent appends for the same user are
//! serialised by the row lock rather than overwriting each other.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Jsonb, Text};
use diesel_async::RunQueryDsl;
use serde_json::Value;

use crate::domain::ports::{OrderHistoryPersistenceError, OrderHistoryRepository};
use crate::domain::{Order, OrderHistory, UserName};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::OrderHistoryRow;
use super::pool::{DbPool, PoolError};
use super::schema::order_histories;

const APPEND_ORDER_SQL: &str = "\
INSERT INTO order_histories (name, history) \
VALUES ($1, jsonb_build_array($2)) \
ON CONFLICT (name) DO UPDATE \
SET history = order_histories.history || EXCLUDED.history";

/// Diesel-backed implementation of the `OrderHistoryRepository` port.
#[derive(Clone)]
pub struct DieselOrderHistoryRepository {
    pool: DbPool,
}

impl DieselOrderHistoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> OrderHistoryPersistenceError {
    map_pool_error(error, OrderHistoryPersistenceError::connection)
}

fn map_diesel(error: diesel::result::Error) -> OrderHistoryPersistenceError {
    map_diesel_error(
        error,
        OrderHistoryPersistenceError::query,
        OrderHistoryPersistenceError::connection,
    )
}

fn row_to_history(row: OrderHistoryRow) -> Result<OrderHistory, OrderHistoryPersistenceError> {
    let name = UserName::new(&row.name).map_err(|err| {
        OrderHistoryPersistenceError::query(format!("stored history name is invalid: {err}"))
    })?;
    let Value::Array(entries) = row.history else {
        return Err(OrderHistoryPersistenceError::query(format!(
            "stored history for {name} is not a JSON array"
        )));
    };
    Ok(OrderHistory::new(
        name,
        entries.into_iter().map(Order::new).collect(),
    ))
}

#[async_trait]
impl OrderHistoryRepository for DieselOrderHistoryRepository {
    async fn find_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<OrderHistory>, OrderHistoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row: Option<OrderHistoryRow> = order_histories::table
            .filter(order_histories::name.eq(name.as_ref()))
            .select(OrderHistoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        row.map(row_to_history).transpose()
    }

    async fn append(
        &self,
        name: &UserName,
        order: &Order,
    ) -> Result<(), OrderHistoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        diesel::sql_query(APPEND_ORDER_SQL)
            .bind::<Text, _>(name.as_ref().to_owned())
            .bind::<Jsonb, _>(order.as_value().clone())
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel)
    }
}
