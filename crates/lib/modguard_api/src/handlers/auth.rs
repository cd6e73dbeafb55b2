//! Authentication request handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::LoginResponse;
use crate::services::auth;

/// True when the `Content-Type` names JSON, ignoring parameters such as
/// `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}

/// `POST /api/login` — authenticate with username + password.
///
/// The body is taken raw so the validation order (media type, JSON parse,
/// field checks, credential check) stays in our hands instead of axum's
/// extractor rejections.
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<LoginResponse>> {
    if state.config.enforce_json_content_type && !is_json_content_type(&headers) {
        return Err(ApiError::UnsupportedMediaType);
    }

    let resp = auth::login(&state.credentials, &body)?;
    Ok(Json(resp))
}
