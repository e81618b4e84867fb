//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies use `Option` fields so a missing field is reported with
//! its name instead of a generic deserialisation failure.

use serde_json::json;

use crate::domain::{Error, LoginValidationError, UserValidationError};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const PASSWORD: FieldName = FieldName::new("password");
pub(crate) const EMAIL: FieldName = FieldName::new("email");

fn field_error(field: FieldName, message: String, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(field, format!("missing required field: {name}"), "missing_field")
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(field, format!("{name} must not be empty"), &format!("empty_{name}"))
}

/// Unwrap a required body field.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => empty_field_error(NAME),
        UserValidationError::EmptyPassword => empty_field_error(PASSWORD),
        UserValidationError::EmptyEmail => empty_field_error(EMAIL),
    }
}

pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyName => empty_field_error(NAME),
        LoginValidationError::EmptyPassword => empty_field_error(PASSWORD),
    }
}
