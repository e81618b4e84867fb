//! Domain primitives, ports, and use-case services.
//!
//! Purpose: Define strongly typed entities shared by the HTTP and persistence
//! adapters, the store connection lifecycle, and the services that gate every
//! data operation on store availability.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic failure payload.
//! - User / UserName / Email / Password — registered account records.
//! - Order / OrderHistory — opaque order payloads and per-user history.
//! - StoreHandle / ConnectionState — store connection lifecycle.
//! - AvailabilityGate — rejects data operations while disconnected.
//! - AccountService / OrderHistoryService — driving port implementations.

pub mod account_service;
pub mod auth;
pub mod availability_gate;
pub mod error;
pub mod order;
pub mod order_history_service;
pub mod ports;
pub mod store_handle;
pub mod trace_id;
pub mod user;

pub use self::account_service::{AccountService, CredentialCheck};
pub use self::auth::{LoginCredentials, LoginValidationError, Registration};
pub use self::availability_gate::AvailabilityGate;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::order::{Order, OrderHistory};
pub use self::order_history_service::OrderHistoryService;
pub use self::store_handle::{
    ConnectionState, ReconnectOutcome, ReconnectPolicy, ReconnectTask, StoreHandle,
};
pub use self::trace_id::TraceId;
pub use self::user::{Email, Password, User, UserName, UserValidationError};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
