//! Health endpoints: store signal plus liveness and readiness probes.
//!
//! Readiness follows the store connection; liveness is flipped off during
//! graceful shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::StoreHandle;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Always `"OK"` while the process answers.
    #[schema(example = "OK")]
    pub app: String,
    /// Whether the durable store is connected.
    pub store: bool,
}

/// Shared health state.
#[derive(Debug)]
pub struct HealthState {
    store: Arc<StoreHandle>,
    live: AtomicBool,
}

impl HealthState {
    /// Report on `store`, starting live.
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self {
            store,
            live: AtomicBool::new(true),
        }
    }

    /// Flag the service as draining so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Ready once the store is connected.
    pub fn is_ready(&self) -> bool {
        self.store.is_connected()
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Process status and the store connection flag.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Service status", body = HealthReport))
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthReport {
            app: "OK".to_owned(),
            store: state.is_ready(),
        })
}

/// Readiness probe. 200 once the store is connected, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Store connected"),
        (status = 503, description = "Store not connected yet")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}
