//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `OrderHistoryRepository`,
//! `StoreConnector`, `ReconnectSleeper`) are implemented by outbound
//! adapters. Driving ports (`UsersQuery`, `LoginService`,
//! `UserRegistration`, `OrderHistoryCommand`, `OrderHistoryQuery`) are what
//! inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod order_history_command;
mod order_history_query;
mod order_history_repository;
mod reconnect_sleeper;
mod store_connector;
mod user_registration;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use order_history_command::MockOrderHistoryCommand;
pub use order_history_command::OrderHistoryCommand;
#[cfg(test)]
pub use order_history_query::MockOrderHistoryQuery;
pub use order_history_query::OrderHistoryQuery;
#[cfg(test)]
pub use order_history_repository::MockOrderHistoryRepository;
pub use order_history_repository::{OrderHistoryPersistenceError, OrderHistoryRepository};
pub use reconnect_sleeper::{ReconnectSleeper, TokioSleeper};
#[cfg(test)]
pub use store_connector::MockStoreConnector;
pub use store_connector::{StoreCollections, StoreConnectionError, StoreConnector};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
