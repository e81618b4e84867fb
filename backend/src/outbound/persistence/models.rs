//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use super::schema::{order_histories, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub email: &'a str,
}

/// Row struct for reading from the order_histories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_histories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderHistoryRow {
    pub name: String,
    pub history: serde_json::Value,
}
