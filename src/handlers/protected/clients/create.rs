// handlers/protected/clients/create.rs - POST /clients handler

use axum::{extract::State, http::StatusCode, Json};

use crate::app::AppState;
use crate::database::Client;
use crate::error::ApiError;
use crate::validation::{ClientRegistration, Validated};

/// POST /clients - insert a client and return the stored row
///
/// Expected Input: `{ "fullName": "Grace Hopper", "email": "grace@example.com", "age": 85 }`
///
/// Output (201): `{ "id": 1, "full_name": "Grace Hopper", "email": "grace@example.com", "age": 85 }`.
/// The row is read back by its new id after the insert; the two statements
/// are not atomic.
pub async fn clients_post(
    State(state): State<AppState>,
    Validated(payload): Validated<ClientRegistration>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let id = state.clients.insert_client(payload.into()).await?;

    let client = state.clients.find_client(id).await?.ok_or_else(|| {
        tracing::error!("Client {} vanished between insert and read-back", id);
        ApiError::internal(format!("client {} not found after insert", id))
    })?;

    tracing::info!("Client created: {} ({})", client.email, client.id);
    Ok((StatusCode::CREATED, Json(client)))
}
