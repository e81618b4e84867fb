//! Registered user accounts.
//!
//! A user is keyed by its unique [`UserName`]. Passwords are stored and
//! compared verbatim; there is no hashing anywhere in this service.

use std::fmt;

use zeroize::Zeroizing;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Name was missing or empty.
    #[error("name must not be empty")]
    EmptyName,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Unique user name, kept exactly as supplied.
///
/// Whitespace is significant: `" carol "` and `"carol"` are different keys.
///
/// # Examples
/// ```
/// use user_service::domain::UserName;
///
/// let name = UserName::new(" carol ").unwrap();
/// assert_eq!(name.as_ref(), " carol ");
/// assert!(UserName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact address, kept exactly as supplied. Format is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let email = email.as_ref();
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Plaintext password exactly as supplied at registration.
///
/// Whitespace is preserved so comparisons see the caller's bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`].
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self(Zeroizing::new(password)))
    }

    /// Exact equality against a candidate password.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_str() == candidate
    }

    /// Raw password text for persistence adapters.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Registered user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: UserName,
    password: Password,
    email: Email,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(name: UserName, password: Password, email: Email) -> Self {
        Self {
            name,
            password,
            email,
        }
    }

    /// Build a user from raw strings, validating each part.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::User;
    ///
    /// let user = User::try_from_strings("carol", "pw1", "c@x.com").unwrap();
    /// assert_eq!(user.name().as_ref(), "carol");
    /// ```
    pub fn try_from_strings(
        name: &str,
        password: &str,
        email: &str,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserName::new(name)?,
            Password::new(password)?,
            Email::new(email)?,
        ))
    }

    /// Unique user name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Stored password.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Contact address.
    pub fn email(&self) -> &Email {
        &self.email
    }
}
