// handlers/public/auth/register.rs - POST /register handler

use axum::{extract::State, http::StatusCode, Json};

use crate::api::TokenResponse;
use crate::app::AppState;
use crate::auth::AdminClaims;
use crate::database::NewAdmin;
use crate::error::ApiError;
use crate::validation::{AdminRegistration, Validated};

/// POST /register - create an administrator and return a token
///
/// Expected Input:
/// ```json
/// { "full_name": "Ada Lovelace", "email": "ada@example.com", "password": "...", "repeatPassword": "..." }
/// ```
///
/// Output (201): `{ "token": "..." }`, whose claims carry `full_name`, `email` and `id`.
/// Errors: 400 `All fields are required`, 500 on store failure (including a duplicate email).
pub async fn register_post(
    State(state): State<AppState>,
    Validated(payload): Validated<AdminRegistration>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let password_hash = state.codec.hash_password(&payload.password).await?;

    let id = state
        .credentials
        .insert_admin(NewAdmin {
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            password_hash,
        })
        .await?;

    let token = state
        .codec
        .sign(&AdminClaims::new(payload.full_name, payload.email.clone(), id).into())?;

    tracing::info!("Administrator registered: {} ({})", payload.email, id);
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}
