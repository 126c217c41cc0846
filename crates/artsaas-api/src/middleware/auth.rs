use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use artsaas_auth::jwt::validate_token;

use crate::state::AppState;

/// Session-token middleware.
///
/// Extracts the `Authorization: Bearer <token>` header, validates it against
/// the platform secret, and inserts the resulting
/// [`artsaas_auth::jwt::AuthUser`] into request extensions for handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = validate_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("session token rejected: {e}");
        StatusCode::UNAUTHORIZED
    })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
