//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered accounts keyed by their unique name.
    users (name) {
        name -> Varchar,
        /// Stored verbatim; no hashing.
        password -> Varchar,
        email -> Varchar,
    }
}

diesel::table! {
    /// One row per user holding a JSONB array of orders.
    order_histories (name) {
        name -> Varchar,
        history -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, order_histories);
