//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows and domain types.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use user_service::outbound::persistence::{DieselStoreConnector, PoolConfig};
//!
//! let connector = DieselStoreConnector::new(PoolConfig::new("postgres://localhost/users"));
//! ```

mod diesel_error_mapping;
mod diesel_order_history_repository;
mod diesel_store_connector;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_order_history_repository::DieselOrderHistoryRepository;
pub use diesel_store_connector::DieselStoreConnector;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
