// api/mod.rs - JSON bodies returned by the handlers
//
// Successful responses are bare objects (no envelope); errors go through
// `ApiError` and always look like `{"error": "..."}`.

use serde::{Deserialize, Serialize};

/// `{"token": "..."}` returned by register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `{"message": "..."}` confirmation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
