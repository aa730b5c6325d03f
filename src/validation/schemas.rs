use serde_json::Value;

use super::{
    object, reject_unknown, required_email, required_integer, required_string, Schema,
    ValidationError,
};

const ADMIN_REJECTION: &str = "All fields are required";
const CLIENT_REJECTION: &str = "Invalid input data";

/// `POST /register` body
///
/// `repeat_password` must be present but is never compared with `password`.
/// Registrations with mismatched passwords go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl Schema for AdminRegistration {
    const REJECTION: &'static str = ADMIN_REJECTION;

    fn validate(body: &Value) -> Result<Self, ValidationError> {
        let fields = object(body)?;
        reject_unknown(fields, &["full_name", "email", "password", "repeatPassword"])?;

        Ok(Self {
            full_name: required_string(fields, "full_name", true)?,
            email: required_email(fields, "email", true)?,
            password: required_string(fields, "password", false)?,
            repeat_password: required_string(fields, "repeatPassword", false)?,
        })
    }
}

/// `POST /login` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogin {
    pub email: String,
    pub password: String,
}

impl Schema for AdminLogin {
    const REJECTION: &'static str = ADMIN_REJECTION;

    fn validate(body: &Value) -> Result<Self, ValidationError> {
        let fields = object(body)?;
        reject_unknown(fields, &["email", "password"])?;

        Ok(Self {
            email: required_email(fields, "email", true)?,
            password: required_string(fields, "password", false)?,
        })
    }
}

/// `POST /clients` body. Keys other than the three below are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRegistration {
    pub full_name: String,
    pub email: String,
    pub age: i32,
}

impl Schema for ClientRegistration {
    const REJECTION: &'static str = CLIENT_REJECTION;

    fn validate(body: &Value) -> Result<Self, ValidationError> {
        let fields = object(body)?;

        Ok(Self {
            full_name: required_string(fields, "fullName", false)?,
            email: required_email(fields, "email", false)?,
            age: required_integer(fields, "age")?,
        })
    }
}
