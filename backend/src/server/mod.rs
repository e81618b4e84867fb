//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;
#[cfg(feature = "metrics")]
use metrics::build_metrics;
pub(crate) use state_builders::build_store_connector;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use state_builders::build_http_state;
use tracing::info;

#[cfg(debug_assertions)]
use user_service::doc::ApiDoc;
use user_service::domain::ports::TokioSleeper;
use user_service::domain::{ReconnectTask, StoreHandle};
use user_service::inbound::http::configure;
use user_service::inbound::http::health::HealthState;
use user_service::inbound::http::state::HttpState;
use user_service::middleware::cross_origin_headers;
use user_service::Trace;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// A running listener plus the background task connecting the store.
pub struct RunningServer {
    pub server: Server,
    pub reconnect: ReconnectTask,
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cross_origin_headers())
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP listener and start connecting the store in the background.
///
/// With the `metrics` feature every route also records response times,
/// served at `/metrics`.
///
/// Requests are accepted immediately; store-backed endpoints answer 503
/// until the reconnect loop succeeds.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    store: Arc<StoreHandle>,
    config: ServerConfig,
) -> std::io::Result<RunningServer> {
    let http_state = build_http_state(&store);
    let ServerConfig {
        bind_addr,
        connector,
        reconnect_policy,
    } = config;
    #[cfg(feature = "metrics")]
    let prometheus = build_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();
    info!(%bind_addr, "listening");

    let reconnect = store.spawn_reconnect(connector, Arc::new(TokioSleeper), reconnect_policy);
    Ok(RunningServer { server, reconnect })
}
