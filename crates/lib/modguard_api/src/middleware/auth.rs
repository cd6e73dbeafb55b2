//! Authentication middleware — session token check for protected routes.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use modguard_core::auth::AuthError;
use modguard_core::auth::token;

use crate::error::ApiError;

/// Axum middleware: requires `Authorization: Bearer <session token>`.
///
/// Three distinct 401 reasons: missing header, "expired" token (string
/// simulation), anything else. No state is needed since the accepted token
/// is a process-wide constant.
pub async fn require_session(request: Request, next: Next) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    token::check_bearer(header)?;

    Ok(next.run(request).await)
}
