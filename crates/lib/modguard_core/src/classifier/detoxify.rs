//! Detoxify classifier — HTTP client for the pretrained scoring sidecar.
//!
//! Calls the sidecar's `/predict` endpoint with a single text and expects a
//! flat JSON object of category → score back. The model itself is an opaque
//! external collaborator; this client only shapes requests and validates
//! what comes back.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{ClassifierError, ModerationScores, TextClassifier};

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// HTTP provider backed by a Detoxify scoring sidecar.
#[derive(Debug, Clone)]
pub struct DetoxifyClassifier {
    client: Client,
    base_url: String,
}

impl DetoxifyClassifier {
    /// Build a client for a sidecar at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TextClassifier for DetoxifyClassifier {
    async fn classify(&self, text: &str) -> Result<ModerationScores, ClassifierError> {
        let url = format!("{}/predict", self.base_url);

        let resp = self
            .client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| ClassifierError::Provider(format!("Detoxify request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ClassifierError::Provider(format!(
                "Detoxify predict failed: {status} {body}"
            )));
        }

        let data: HashMap<String, serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| ClassifierError::Provider(format!("Detoxify response parse error: {e}")))?;

        // The sidecar serializes model tensors; accept anything that reads
        // as a JSON number and reject the rest before validation.
        let mut raw = Vec::with_capacity(data.len());
        for (category, value) in data {
            let score = value.as_f64().ok_or_else(|| {
                ClassifierError::Provider(format!(
                    "Detoxify returned non-numeric score for {category}: {value}"
                ))
            })?;
            raw.push((category, score));
        }

        ModerationScores::from_raw(raw)
    }

    fn name(&self) -> &str {
        "detoxify"
    }
}
