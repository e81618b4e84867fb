//! Account handlers.
//!
//! ```text
//! GET  /check/{name}
//! GET  /users
//! POST /login    {"name":"carol","password":"pw1"}
//! POST /register {"name":"carol","password":"pw1","email":"c@x.com"}
//! ```
//!
//! Login and registration bodies may also be sent as URL-encoded forms.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, Registration, User, UserName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, into_body};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    EMAIL, NAME, PASSWORD, map_login_validation_error, map_user_validation_error, require,
};

/// Login request body for `POST /login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Registration request body for `POST /register`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Public view of an account. The password is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "carol")]
    pub name: String,
    #[schema(example = "c@x.com")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().as_ref().to_owned(),
        }
    }
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = Error;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, NAME)?;
        let password = require(value.password, PASSWORD)?;
        Self::try_from_parts(&name, &password).map_err(map_login_validation_error)
    }
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = Error;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, NAME)?;
        let password = require(value.password, PASSWORD)?;
        let email = require(value.email, EMAIL)?;
        Self::try_from_parts(&name, &password, &email).map_err(map_user_validation_error)
    }
}

pub(crate) fn parse_name(raw: &str) -> Result<UserName, Error> {
    UserName::new(raw).map_err(map_user_validation_error)
}

/// Check that a user exists.
#[utoipa::path(
    get,
    path = "/check/{name}",
    params(("name" = String, Path, description = "User name")),
    responses(
        (status = 200, description = "User exists", body = String),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "checkUser"
)]
#[get("/check/{name}")]
pub async fn check_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let name = parse_name(&path.into_inner())?;
    state.users.find_user(&name).await?;
    Ok(HttpResponse::Ok().content_type("text/plain").body("OK"))
}

/// List every registered user. Intended for debugging; no pagination.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Authenticate with name and password.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: JsonOrForm<LoginRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials = LoginCredentials::try_from(into_body(payload))?;
    info!(name = %credentials.name(), "login");
    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Name already taken", body = Error),
        (status = 503, description = "Store not connected", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: JsonOrForm<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = Registration::try_from(into_body(payload))?;
    info!(name = %registration.name(), "register");
    let user = state.registration.register(registration).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}
