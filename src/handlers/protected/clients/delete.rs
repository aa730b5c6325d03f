// handlers/protected/clients/delete.rs - DELETE /clients/:id handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::MessageResponse;
use crate::app::AppState;
use crate::error::ApiError;

const NOT_FOUND: &str = "Client not found";

/// DELETE /clients/:id - remove one client
///
/// An id that is not an integer can never match a row, so it is a 404 like
/// any other unknown id.
pub async fn client_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: i64 = id.trim().parse().map_err(|_| ApiError::not_found(NOT_FOUND))?;

    if state.clients.find_client(id).await?.is_none() {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    // Another request may have removed the row since the lookup
    if !state.clients.delete_client(id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    tracing::info!("Client deleted: {}", id);
    Ok(Json(MessageResponse::new("Client deleted successfully")))
}
