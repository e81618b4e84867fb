//! Orders and per-user order histories.
//!
//! Orders are caller-supplied JSON documents stored verbatim. The service
//! never inspects their shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::UserName;

/// Opaque order payload.
///
/// # Examples
/// ```
/// use user_service::domain::Order;
/// use serde_json::json;
///
/// let order = Order::new(json!({ "sku": "A1", "qty": 2 }));
/// assert_eq!(order.as_value()["sku"], "A1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Value);

impl Order {
    /// Wrap a JSON document as an order.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the stored payload.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the order, yielding the payload.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Order {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Append-only list of orders recorded for one user.
///
/// ## Invariants
/// - `history` only grows; entries keep their append order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistory {
    name: UserName,
    history: Vec<Order>,
}

impl OrderHistory {
    /// Build a history record.
    pub fn new(name: UserName, history: Vec<Order>) -> Self {
        Self { name, history }
    }

    /// Owner of the history.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Orders in append order.
    pub fn orders(&self) -> &[Order] {
        &self.history
    }

    /// Consume the record, yielding the owner and orders.
    pub fn into_parts(self) -> (UserName, Vec<Order>) {
        (self.name, self.history)
    }
}
