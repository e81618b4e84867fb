//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request, response, and error schemas they reference. The
//! document backs Swagger UI in debug builds and is printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::health::HealthReport;
use crate::inbound::http::orders::{OrderHistoryResponse, OrderPayload};
use crate::inbound::http::users::{LoginRequest, RegisterRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "Accounts, login, and per-user order history backed by a reconnecting store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::check_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::login,
        crate::inbound::http::users::register,
        crate::inbound::http::orders::submit_order,
        crate::inbound::http::orders::get_history,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        LoginRequest,
        RegisterRequest,
        UserResponse,
        OrderPayload,
        OrderHistoryResponse,
        HealthReport
    )),
    tags(
        (name = "users", description = "Account lookup, login, and registration"),
        (name = "orders", description = "Order submission and history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
