use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::Claims;
use crate::error::ApiError;

const UNAUTHORIZED: &str = "Unauthorized";

/// Authenticated administrator context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedAdmin {
    pub claims: Claims,
}

/// Bearer token gate for protected routes.
///
/// Any valid token passes; the decoded claims are attached to the request as
/// an [`AuthenticatedAdmin`] extension. Every failure is the same 401.
pub async fn require_bearer(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(|msg| {
        tracing::debug!("Rejected request to {}: {}", request.uri().path(), msg);
        ApiError::unauthorized(UNAUTHORIZED)
    })?;

    let claims = state.codec.verify_token(token).map_err(|e| {
        tracing::warn!("Rejected token for {}: {}", request.uri().path(), e);
        ApiError::unauthorized(UNAUTHORIZED)
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { claims });

    Ok(next.run(request).await)
}

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format")?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or("Authorization header must use Bearer token format")?
        .trim();

    if token.is_empty() {
        return Err("Empty JWT token");
    }
    Ok(token)
}
