//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod orders;
pub mod payload;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor settings shared by every body-reading handler.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Register every endpoint and the JSON extractor configuration.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::health)
        .service(health::ready)
        .service(health::live)
        .service(users::check_user)
        .service(users::list_users)
        .service(users::login)
        .service(users::register)
        .service(orders::submit_order)
        .service(orders::get_history);
}
