//! Order submission and history handlers.
//!
//! ```text
//! POST /order/{name}   {"sku":"O1","qty":2}
//! GET  /history/{name}
//! ```
//!
//! Order bodies are opaque JSON documents and are stored as received. A
//! URL-encoded form is stored as an object of its string fields.

use std::collections::BTreeMap;

use actix_web::{Either, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, Order, OrderHistory};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::form_to_object;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::parse_name;

/// Any JSON document submitted as an order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct OrderPayload(pub Value);

impl From<OrderPayload> for Order {
    fn from(payload: OrderPayload) -> Self {
        Order::new(payload.0)
    }
}

/// A user's orders in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct OrderHistoryResponse {
    #[schema(example = "alice")]
    pub name: String,
    #[schema(value_type = Vec<Object>)]
    pub history: Vec<Value>,
}

impl From<OrderHistory> for OrderHistoryResponse {
    fn from(history: OrderHistory) -> Self {
        let (name, orders) = history.into_parts();
        Self {
            name: name.to_string(),
            history: orders.into_iter().map(Order::into_value).collect(),
        }
    }
}

/// Append an order to a registered user's history.
#[utoipa::path(
    post,
    path = "/order/{name}",
    params(("name" = String, Path, description = "User name")),
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Order recorded", body = String),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "submitOrder"
)]
#[post("/order/{name}")]
pub async fn submit_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Either<web::Json<OrderPayload>, web::Form<BTreeMap<String, String>>>,
) -> ApiResult<HttpResponse> {
    let name = parse_name(&path.into_inner())?;
    let order = match payload {
        Either::Left(json) => Order::from(json.into_inner()),
        Either::Right(form) => Order::new(form_to_object(form.into_inner())),
    };
    info!(name = %name, "order submitted");
    state.orders.submit_order(&name, order).await?;
    Ok(HttpResponse::Ok().content_type("text/plain").body("OK"))
}

/// Fetch a user's order history.
#[utoipa::path(
    get,
    path = "/history/{name}",
    params(("name" = String, Path, description = "User name")),
    responses(
        (status = 200, description = "Order history", body = OrderHistoryResponse),
        (status = 404, description = "No history for user", body = Error),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "getHistory"
)]
#[get("/history/{name}")]
pub async fn get_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<OrderHistoryResponse>> {
    let name = parse_name(&path.into_inner())?;
    let history = state.history.get_history(&name).await?;
    Ok(web::Json(OrderHistoryResponse::from(history)))
}
