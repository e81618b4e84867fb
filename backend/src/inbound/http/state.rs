//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only depend on
//! driving ports, so tests can swap in mocks without any store.

use std::sync::Arc;

use crate::domain::ports::{
    LoginService, OrderHistoryCommand, OrderHistoryQuery, UserRegistration, UsersQuery,
};
use crate::domain::{AccountService, OrderHistoryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub orders: Arc<dyn OrderHistoryCommand>,
    pub history: Arc<dyn OrderHistoryQuery>,
}

impl HttpState {
    /// Wire every port to the production services.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_service::domain::{AccountService, AvailabilityGate, OrderHistoryService, StoreHandle};
    /// use user_service::inbound::http::state::HttpState;
    ///
    /// let gate = AvailabilityGate::new(Arc::new(StoreHandle::new()));
    /// let state = HttpState::from_services(
    ///     AccountService::new(gate.clone()),
    ///     OrderHistoryService::new(gate),
    /// );
    /// let _users = state.users.clone();
    /// ```
    pub fn from_services(accounts: AccountService, orders: OrderHistoryService) -> Self {
        let accounts = Arc::new(accounts);
        let orders = Arc::new(orders);
        Self {
            users: accounts.clone(),
            login: accounts.clone(),
            registration: accounts,
            orders: orders.clone(),
            history: orders,
        }
    }
}
