//! Fixed session token.
//!
//! The demo auth scheme issues a single hard-coded token on login and accepts
//! exactly that token back. There is no signing, no expiry timestamp and no
//! per-user binding; "expired" tokens are simulated by substring matching so
//! that clients can exercise the expiry error path.

use super::AuthError;

/// The one token the API ever issues.
pub const SESSION_TOKEN: &str = "fake-jwt-token";

/// The `Authorization` header value that grants access.
const BEARER_VALUE: &str = "Bearer fake-jwt-token";

/// Returns the token handed out on successful login.
pub fn issue_token() -> &'static str {
    SESSION_TOKEN
}

/// Classify an `Authorization` header value.
///
/// - exactly `Bearer fake-jwt-token` → Ok
/// - any value containing `expired` (case-insensitive) → [`AuthError::TokenExpired`]
/// - anything else → [`AuthError::TokenInvalid`]
///
/// A missing header is classified by the caller as
/// [`AuthError::MissingAuthHeader`] before this function is reached.
pub fn check_bearer(header_value: &str) -> Result<(), AuthError> {
    if header_value == BEARER_VALUE {
        return Ok(());
    }
    if header_value.to_ascii_lowercase().contains("expired") {
        return Err(AuthError::TokenExpired);
    }
    Err(AuthError::TokenInvalid)
}
