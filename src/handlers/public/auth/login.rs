// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, Json};

use crate::api::TokenResponse;
use crate::app::AppState;
use crate::auth::SessionClaims;
use crate::error::ApiError;
use crate::validation::{AdminLogin, Validated};

/// Same answer for unknown email and wrong password
pub const CREDENTIALS_MISMATCH: &str = "Email or password did not match";

/// POST /login - verify credentials and return a session token
///
/// Expected Input: `{ "email": "ada@example.com", "password": "..." }`
///
/// Output (200): `{ "token": "..." }` with `email` and `id` claims.
/// Errors: 400 `All fields are required` or [`CREDENTIALS_MISMATCH`], 500 on store failure.
pub async fn login_post(
    State(state): State<AppState>,
    Validated(payload): Validated<AdminLogin>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Some(admin) = state
        .credentials
        .find_admin_by_email(&payload.email)
        .await?
    else {
        tracing::warn!("Login failed for {}: unknown email", payload.email);
        return Err(ApiError::validation(CREDENTIALS_MISMATCH));
    };

    if !state
        .codec
        .verify_password(&payload.password, &admin.password_hash)
        .await?
    {
        tracing::warn!("Login failed for {}: wrong password", payload.email);
        return Err(ApiError::validation(CREDENTIALS_MISMATCH));
    }

    let token = state
        .codec
        .sign(&SessionClaims::new(admin.email.clone(), admin.id).into())?;

    tracing::info!("Administrator logged in: {} ({})", admin.email, admin.id);
    Ok(Json(TokenResponse { token }))
}
