//! API server configuration.

use std::path::PathBuf;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Which classifier backs `/api/moderate`: `"detoxify"` or `"lexicon"`.
    pub classifier_provider: String,
    /// Base URL of the Detoxify scoring sidecar.
    pub detoxify_url: String,
    /// Reject non-JSON `Content-Type` on login with 415.
    pub enforce_json_content_type: bool,
    /// Optional JSON credentials file; demo mapping when unset.
    pub credentials_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                    | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `BIND_ADDR`                 | `127.0.0.1:8000`        |
    /// | `CLASSIFIER_PROVIDER`       | `lexicon`               |
    /// | `DETOXIFY_URL`              | `http://127.0.0.1:9100` |
    /// | `ENFORCE_JSON_CONTENT_TYPE` | `true`                  |
    /// | `CREDENTIALS_FILE`          | unset (demo mapping)    |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".into()),
            classifier_provider: std::env::var("CLASSIFIER_PROVIDER")
                .unwrap_or_else(|_| "lexicon".into()),
            detoxify_url: std::env::var("DETOXIFY_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9100".into()),
            enforce_json_content_type: std::env::var("ENFORCE_JSON_CONTENT_TYPE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            credentials_file: std::env::var("CREDENTIALS_FILE").ok().map(PathBuf::from),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".into(),
            classifier_provider: "lexicon".into(),
            detoxify_url: "http://127.0.0.1:9100".into(),
            enforce_json_content_type: true,
            credentials_file: None,
        }
    }
}
