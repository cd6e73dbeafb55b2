//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use modguard_core::auth::AuthError;
use modguard_core::classifier::ClassifierError;

use crate::models::ErrorBody;

/// Convenience alias for handler return types.
pub type ApiResult<T> = Result<T, ApiError>;

/// Application-level errors with HTTP status mapping.
///
/// Every variant renders as `{"detail": "<message>"}`; the message is the
/// whole externally-visible contract, so variants that carry one store it
/// verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not valid JSON.
    #[error("Invalid JSON")]
    InvalidRequest,

    /// A required field is absent or blank; carries the user-facing message.
    #[error("{0}")]
    MissingField(&'static str),

    /// The `text` field is present but not a string.
    #[error("Text must be a string")]
    TypeMismatch,

    /// Body parsed but has the wrong shape (not a JSON object).
    #[error("Invalid payload")]
    InvalidPayload,

    /// Content type is not JSON on an endpoint that enforces it.
    #[error("Unsupported Media Type: JSON required")]
    UnsupportedMediaType,

    /// Unknown username or wrong password; deliberately indistinct.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, expired or invalid session token.
    #[error("{0}")]
    Unauthorized(String),

    /// The classifier collaborator failed; carries the underlying error text.
    #[error("{0}")]
    ModerationFailure(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidRequest
            | ApiError::MissingField(_)
            | ApiError::TypeMismatch
            | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InvalidCredentials | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::ModerationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::MissingAuthHeader | AuthError::TokenExpired | AuthError::TokenInvalid => {
                ApiError::Unauthorized(e.to_string())
            }
            // Store errors only occur at startup; request paths never
            // produce one.
            AuthError::StoreError(m) => ApiError::Unauthorized(m),
        }
    }
}

impl From<ClassifierError> for ApiError {
    fn from(e: ClassifierError) -> Self {
        ApiError::ModerationFailure(e.to_string())
    }
}
