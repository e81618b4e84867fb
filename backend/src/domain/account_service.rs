//! Account use-cases: lookup, listing, login and registration.
//!
//! Every operation runs behind the [`AvailabilityGate`], so nothing reaches
//! the user repository while the store is disconnected.

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{LoginService, UserPersistenceError, UserRegistration, UsersQuery};
use crate::domain::{
    AvailabilityGate, Error, LoginCredentials, Registration, User, UserName,
};

/// Result of comparing supplied credentials with the stored account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCheck {
    /// The password matched exactly.
    Match(User),
    /// The user exists but the password differs.
    Mismatch,
    /// No user with that name.
    NotFound,
}

/// Account service implementing the user-facing driving ports.
#[derive(Debug, Clone)]
pub struct AccountService {
    gate: AvailabilityGate,
}

pub(crate) fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Conflict { name } => {
            Error::conflict(format!("user name already exists: {name}"))
        }
        other => {
            error!(error = %other, "user store operation failed");
            Error::internal(other.to_string())
        }
    }
}

fn user_not_found(name: &UserName) -> Error {
    Error::not_found(format!("user not found: {name}"))
}

impl AccountService {
    /// Create a service gated on `gate`.
    pub fn new(gate: AvailabilityGate) -> Self {
        Self { gate }
    }

    /// Look up `credentials.name()` and compare passwords by exact equality.
    ///
    /// Passwords are stored and compared in plaintext.
    pub async fn check_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<CredentialCheck, Error> {
        self.gate
            .guard(|store| async move {
                let found = store
                    .users
                    .find_by_name(credentials.name())
                    .await
                    .map_err(map_user_persistence_error)?;
                Ok(match found {
                    None => CredentialCheck::NotFound,
                    Some(user) if user.password().matches(credentials.password()) => {
                        CredentialCheck::Match(user)
                    }
                    Some(_) => CredentialCheck::Mismatch,
                })
            })
            .await
    }
}

#[async_trait]
impl UsersQuery for AccountService {
    async fn find_user(&self, name: &UserName) -> Result<User, Error> {
        self.gate
            .guard(|store| async move {
                store
                    .users
                    .find_by_name(name)
                    .await
                    .map_err(map_user_persistence_error)?
                    .ok_or_else(|| user_not_found(name))
            })
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.gate
            .guard(|store| async move {
                store.users.list().await.map_err(map_user_persistence_error)
            })
            .await
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        match self.check_credentials(credentials).await? {
            CredentialCheck::Match(user) => Ok(user),
            CredentialCheck::Mismatch => Err(Error::unauthorized("invalid credentials")),
            CredentialCheck::NotFound => Err(user_not_found(credentials.name())),
        }
    }
}

#[async_trait]
impl UserRegistration for AccountService {
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        self.gate
            .guard(|store| async move {
                let name = registration.name().clone();
                let taken = store
                    .users
                    .exists(&name)
                    .await
                    .map_err(map_user_persistence_error)?;
                if taken {
                    return Err(Error::conflict(format!("user name already exists: {name}")));
                }
                let user = registration.into_user();
                store
                    .users
                    .insert(&user)
                    .await
                    .map_err(map_user_persistence_error)?;
                Ok(user)
            })
            .await
    }
}
