//! Authentication and registration inputs.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{User, UserName, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Name was empty.
    EmptyName,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `name` is non-empty and kept exactly as supplied.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use user_service::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("carol", "pw1").unwrap();
/// assert_eq!(creds.name().as_ref(), "carol");
/// assert_eq!(creds.password(), "pw1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    name: UserName,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw name/password inputs.
    pub fn try_from_parts(name: &str, password: &str) -> Result<Self, LoginValidationError> {
        let name = UserName::new(name).map_err(|_| LoginValidationError::EmptyName)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Name used for the account lookup.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    user: User,
}

impl Registration {
    /// Construct a registration from raw inputs.
    pub fn try_from_parts(
        name: &str,
        password: &str,
        email: &str,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            user: User::try_from_strings(name, password, email)?,
        })
    }

    /// Name the caller wants to claim.
    pub fn name(&self) -> &UserName {
        self.user.name()
    }

    /// Consume the registration, yielding the user record to insert.
    pub fn into_user(self) -> User {
        self.user
    }
}
