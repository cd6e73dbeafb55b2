//! Moderation request handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use crate::AppState;
use crate::error::ApiResult;
use crate::models::ModerationResponse;
use crate::services::moderation;

/// `POST /api/moderate` — score a text and label it toxic/non-toxic.
pub async fn moderate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ModerationResponse>> {
    let resp = moderation::moderate(state.classifier.as_ref(), &body).await?;
    Ok(Json(resp))
}
