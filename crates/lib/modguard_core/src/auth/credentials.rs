//! Demo credential store.
//!
//! Usernames map to plaintext passwords. This is demo scaffolding, not real
//! authentication: there is no hashing and the mapping is immutable for the
//! process lifetime. The store is built once at startup and shared read-only
//! across handlers.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::AuthError;

/// Immutable username → password mapping.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

/// On-disk shape of a credentials file: a flat JSON object of
/// username → password pairs.
#[derive(Debug, Deserialize)]
struct CredentialsFile(HashMap<String, String>);

impl CredentialStore {
    /// The built-in demo mapping: `admin` / `password123`.
    pub fn demo() -> Self {
        let mut users = HashMap::new();
        users.insert("admin".to_string(), "password123".to_string());
        Self { users }
    }

    /// Build a store from explicit pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            users: pairs
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// Load a store from a JSON file of username → password pairs.
    pub fn from_file(path: &Path) -> Result<Self, AuthError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AuthError::StoreError(format!("read {}: {e}", path.display())))?;
        let parsed: CredentialsFile = serde_json::from_str(&raw)
            .map_err(|e| AuthError::StoreError(format!("parse {}: {e}", path.display())))?;
        info!(path = %path.display(), users = parsed.0.len(), "loaded credentials file");
        Ok(Self { users: parsed.0 })
    }

    /// Resolve the store from an optional file path, falling back to the
    /// demo mapping when no path is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self, AuthError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::demo()),
        }
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the store has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Verify a username/password pair.
    ///
    /// Comparison is case-sensitive and exact; no trimming. Unknown username
    /// and wrong password collapse into the same error.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
