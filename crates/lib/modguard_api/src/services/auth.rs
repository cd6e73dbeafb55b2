//! Login flow — payload validation and credential check.

use serde_json::Value;
use tracing::{debug, info};

use modguard_core::auth::credentials::CredentialStore;
use modguard_core::auth::token;

use crate::error::{ApiError, ApiResult};
use crate::models::LoginResponse;

/// Pull a field out of the login payload as a non-empty string.
///
/// Absent, empty and non-string values all count as missing; no trimming,
/// so a whitespace-only password is still a password.
fn required_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Authenticate a raw login body against the credential store.
///
/// Validation order is part of the contract: JSON shape first, then
/// username, then password, then the credential check. Both unknown
/// username and wrong password yield the same `Invalid credentials`.
pub fn login(credentials: &CredentialStore, body: &[u8]) -> ApiResult<LoginResponse> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidRequest)?;

    let username =
        required_field(&value, "username").ok_or(ApiError::MissingField("Username required"))?;
    let password =
        required_field(&value, "password").ok_or(ApiError::MissingField("Password required"))?;

    credentials.verify(username, password).map_err(|e| {
        debug!(username, "login rejected");
        ApiError::from(e)
    })?;

    info!(username, "login succeeded");
    Ok(LoginResponse {
        status: "success".to_string(),
        token: token::issue_token().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        CredentialStore::demo()
    }

    #[test]
    fn valid_credentials_return_the_fixed_token() {
        let resp = login(&store(), br#"{"username":"admin","password":"password123"}"#).unwrap();
        assert_eq!(resp.status, "success");
        assert_eq!(resp.token, "fake-jwt-token");
    }

    #[test]
    fn malformed_json_is_invalid_request() {
        assert!(matches!(
            login(&store(), b"{not json"),
            Err(ApiError::InvalidRequest)
        ));
    }

    #[test]
    fn missing_username_is_reported_first() {
        // Both fields missing: username wins per the validation order.
        let err = login(&store(), b"{}").unwrap_err();
        assert_eq!(err.to_string(), "Username required");

        let err = login(&store(), br#"{"password":"password123"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Username required");
    }

    #[test]
    fn empty_or_non_string_fields_count_as_missing() {
        let err = login(&store(), br#"{"username":"","password":"x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Username required");

        let err = login(&store(), br#"{"username":42,"password":"x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Username required");

        let err = login(&store(), br#"{"username":"admin","password":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Password required");
    }

    #[test]
    fn unknown_user_and_wrong_password_are_indistinguishable() {
        let a = login(&store(), br#"{"username":"ghost","password":"password123"}"#).unwrap_err();
        let b = login(&store(), br#"{"username":"admin","password":"wrong"}"#).unwrap_err();
        assert_eq!(a.to_string(), b.to_string());
        assert!(matches!(a, ApiError::InvalidCredentials));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let resp = login(
            &store(),
            br#"{"username":"admin","password":"password123","remember_me":true}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "fake-jwt-token");
    }
}
