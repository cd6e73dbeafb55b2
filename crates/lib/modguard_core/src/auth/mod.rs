//! Authentication logic.
//!
//! Provides the demo credential store and the fixed session token used by
//! the protected API surface. Shared by `modguard_api` and the server binary.

pub mod credentials;
pub mod token;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authorization header missing")]
    MissingAuthHeader,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid or expired token")]
    TokenInvalid,

    #[error("Credential store error: {0}")]
    StoreError(String),
}
