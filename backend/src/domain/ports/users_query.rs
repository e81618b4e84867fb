//! Driving port for user lookups.
//!
//! Inbound adapters use this port to read accounts without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserName};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Look up one user by name.
    ///
    /// Fails with `not_found` when no such user is registered.
    async fn find_user(&self, name: &UserName) -> Result<User, Error>;

    /// Every registered user. Unpaginated; intended for debugging.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
