//! User accounts and order history service.
//!
//! The crate is arranged as a hexagon: `domain` holds the types, ports, and
//! use-case services; `inbound` adapts HTTP requests onto the driving ports;
//! `outbound` implements the driven ports against PostgreSQL or memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
