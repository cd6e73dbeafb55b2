//! Protected-resource handler.
//!
//! Auth lives in `middleware::auth::require_session`; by the time this
//! handler runs the token has already been accepted.

use axum::Json;

use crate::error::ApiResult;
use crate::models::ProtectedResponse;

/// `GET /api/protected` — static payload behind the session token.
pub async fn protected_handler() -> ApiResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        message: "You have access to protected data".to_string(),
    }))
}
