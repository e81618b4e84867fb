//! Builders for the store connector and HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use user_service::domain::ports::StoreConnector;
use user_service::domain::{AccountService, AvailabilityGate, OrderHistoryService, StoreHandle};
use user_service::inbound::http::state::HttpState;
use user_service::outbound::memory::InMemoryStoreConnector;
use user_service::outbound::persistence::{DieselStoreConnector, PoolConfig};

/// Pick PostgreSQL when a pool is configured, otherwise the in-memory store.
pub(crate) fn build_store_connector(pool: Option<PoolConfig>) -> Arc<dyn StoreConnector> {
    match pool {
        Some(config) => Arc::new(DieselStoreConnector::new(config)),
        None => {
            warn!("no database URL configured; using in-memory store");
            Arc::new(InMemoryStoreConnector::new())
        }
    }
}

/// Wire every driving port to services gated on `store`.
pub(crate) fn build_http_state(store: &Arc<StoreHandle>) -> web::Data<HttpState> {
    let gate = AvailabilityGate::new(Arc::clone(store));
    web::Data::new(HttpState::from_services(
        AccountService::new(gate.clone()),
        OrderHistoryService::new(gate),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use user_service::domain::{ErrorCode, Registration, UserName};

    #[rstest]
    #[tokio::test]
    async fn missing_pool_selects_working_memory_store() {
        let connector = build_store_connector(None);

        let collections = connector.connect().await.expect("memory store connects");

        let name = UserName::new("alice").expect("valid name");
        assert!(!collections.users.exists(&name).await.expect("exists query"));
    }

    #[rstest]
    #[tokio::test]
    async fn state_is_gated_on_the_store_handle() {
        let store = Arc::new(StoreHandle::new());
        let state = build_http_state(&store);
        let registration =
            Registration::try_from_parts("bob", "pw", "b@x.com").expect("valid registration");

        let err = state
            .registration
            .register(registration.clone())
            .await
            .expect_err("store not connected");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);

        store
            .connect(&InMemoryStoreConnector::new())
            .await
            .expect("memory store connects");
        let user = state
            .registration
            .register(registration)
            .await
            .expect("registered once connected");
        assert_eq!(user.name().as_ref(), "bob");
    }
}
