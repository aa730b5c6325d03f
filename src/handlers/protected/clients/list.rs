// handlers/protected/clients/list.rs - GET /clients handler

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::Client;
use crate::error::ApiError;

/// GET /clients - every client, ordered by id. No paging, no filters.
pub async fn clients_get(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.clients.list_clients().await?;
    Ok(Json(clients))
}
