// handlers/protected/root.rs - GET / handler

use axum::Json;

use crate::api::MessageResponse;

/// GET / - confirms the presented token is valid
pub async fn root_get() -> Json<MessageResponse> {
    Json(MessageResponse::new("Authorized"))
}
