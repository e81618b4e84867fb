//! Service entry-point: loads settings, starts the HTTP listener, and keeps
//! reconnecting the store in the background until it is reachable.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{RunningServer, ServerConfig, build_store_connector, create_server};
use user_service::domain::StoreHandle;
use user_service::inbound::http::health::HealthState;
use user_service::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let store = Arc::new(StoreHandle::new());
    let health_state = web::Data::new(HealthState::new(Arc::clone(&store)));
    let config = ServerConfig::new(
        settings.bind_addr(),
        build_store_connector(settings.pool_config()),
    )
    .with_reconnect_policy(settings.reconnect_policy());

    let RunningServer { server, reconnect } =
        create_server(health_state.clone(), store, config)?;

    // Actix drains in-flight requests on the same signal.
    let draining = health_state.clone();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            draining.mark_unhealthy();
            info!("shutdown requested; liveness now failing");
        }
    });

    let result = server.await;
    reconnect.cancel();
    info!("server stopped");
    result
}
