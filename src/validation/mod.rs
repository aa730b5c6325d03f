// validation/mod.rs - request payload schemas
//
// Every route that takes a body validates it through a `Schema`. Failures are
// collapsed into a single route-level message (`Schema::REJECTION`) so clients
// get a uniform `400 {"error": ...}`; the field-level reason is only logged.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::ApiError;

pub mod email;
pub mod schemas;

pub use email::is_valid_email;
pub use schemas::{AdminLogin, AdminRegistration, ClientRegistration};

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("\"{0}\" is required")]
    Missing(&'static str),

    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{0}\" must be a valid email")]
    InvalidEmail(&'static str),

    #[error("\"{0}\" must be an integer")]
    NotAnInteger(&'static str),

    #[error("\"{0}\" is not allowed")]
    UnknownField(String),
}

/// A payload shape accepted by one route
pub trait Schema: Sized {
    /// Message returned to the client when the payload is rejected
    const REJECTION: &'static str;

    fn validate(body: &Value) -> Result<Self, ValidationError>;
}

/// Extractor yielding a validated, normalized payload.
///
/// A body that is not JSON at all is treated like an empty object, so it
/// fails with the route's own message rather than a transport error.
#[derive(Debug)]
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(rejection) => {
                tracing::debug!("Unreadable JSON body: {}", rejection);
                Value::Object(Map::new())
            }
        };

        T::validate(&body).map(Validated).map_err(|e| {
            tracing::debug!("Payload rejected: {}", e);
            ApiError::validation(T::REJECTION)
        })
    }
}

// Field helpers shared by the schemas

pub(crate) fn object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

pub(crate) fn reject_unknown(
    fields: &Map<String, Value>,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    match fields.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::UnknownField(key.clone())),
        None => Ok(()),
    }
}

/// Required, non-empty string. Whitespace only counts as empty when `trim` is set.
pub(crate) fn required_string(
    fields: &Map<String, Value>,
    name: &'static str,
    trim: bool,
) -> Result<String, ValidationError> {
    let value = match fields.get(name) {
        None => return Err(ValidationError::Missing(name)),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ValidationError::NotAString(name)),
    };

    let value = if trim { value.trim() } else { value.as_str() };
    if value.is_empty() {
        return Err(ValidationError::Empty(name));
    }
    Ok(value.to_string())
}

pub(crate) fn required_email(
    fields: &Map<String, Value>,
    name: &'static str,
    normalize: bool,
) -> Result<String, ValidationError> {
    let email = required_string(fields, name, normalize)?;
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail(name));
    }
    Ok(if normalize { email.to_lowercase() } else { email })
}

/// Required integer. Integer-valued numbers and numeric strings are accepted.
pub(crate) fn required_integer(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<i32, ValidationError> {
    let parsed = match fields.get(name) {
        None => return Err(ValidationError::Missing(name)),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        Some(_) => None,
    };

    parsed
        .and_then(|i| i32::try_from(i).ok())
        .ok_or(ValidationError::NotAnInteger(name))
}

/// Whole, finite number within `i32` range (`42.0`, `4e1`)
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64).then_some(f as i64)
}
