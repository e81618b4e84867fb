//! Request bodies accepted as JSON or as URL-encoded forms.

use std::collections::BTreeMap;

use actix_web::{Either, web};
use serde_json::Value;

/// Body extractor for `application/json` or `application/x-www-form-urlencoded`.
///
/// JSON is tried first. When neither decoder accepts the body the JSON error
/// is reported, so malformed bodies still answer `invalid_json`.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Unwrap whichever representation was sent.
pub fn into_body<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Form fields as a flat JSON object of strings.
pub fn form_to_object(fields: BTreeMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}
