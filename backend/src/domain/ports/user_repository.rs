//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store rejected an insert because the name is already taken.
        Conflict { name: String } => "user name already exists: {name}",
    }
}

/// Store-backed access to registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by its unique name.
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError>;

    /// Whether a user with `name` is registered.
    async fn exists(&self, name: &UserName) -> Result<bool, UserPersistenceError>;

    /// Insert a new user.
    ///
    /// Callers check [`UserRepository::exists`] first. Adapters with a
    /// unique key on the name report a lost race as
    /// [`UserPersistenceError::Conflict`].
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Every registered user, ordered by name.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
