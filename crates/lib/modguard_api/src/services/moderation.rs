//! Moderation flow — payload validation, classification, response shaping.

use serde_json::Value;
use tracing::info;

use modguard_core::classifier::{TextClassifier, ToxicityLabel};

use crate::error::{ApiError, ApiResult};
use crate::models::ModerationResponse;

/// Validate a raw moderation body down to the text to classify.
///
/// Order: JSON parse, object shape, field presence, field type, blankness.
/// The text is returned untrimmed; only the blankness check trims.
fn validate_payload(body: &[u8]) -> ApiResult<String> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidRequest)?;

    let object = value.as_object().ok_or(ApiError::InvalidPayload)?;

    // JSON null counts as absent, same as no key at all.
    let text = match object.get("text") {
        None | Some(Value::Null) => return Err(ApiError::MissingField("Missing 'text' field")),
        Some(v) => v,
    };

    let text = text.as_str().ok_or(ApiError::TypeMismatch)?;

    if text.trim().is_empty() {
        return Err(ApiError::MissingField("Text required"));
    }

    Ok(text.to_string())
}

/// Run a moderation request end to end.
///
/// Classifier failures of any kind (transport, bad scores, missing
/// `toxicity` category) surface as [`ApiError::ModerationFailure`].
pub async fn moderate(
    classifier: &dyn TextClassifier,
    body: &[u8],
) -> ApiResult<ModerationResponse> {
    let text = validate_payload(body)?;

    let scores = classifier.classify(&text).await?;
    let label = ToxicityLabel::from_scores(&scores)?;

    info!(
        classifier = classifier.name(),
        label = label.as_str(),
        "text moderated"
    );

    Ok(ModerationResponse {
        text,
        toxicity: label,
        toxicity_scores: scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use modguard_core::classifier::{ClassifierError, ModerationScores};

    /// Classifier that always fails, for the error path.
    struct BrokenClassifier;

    #[async_trait]
    impl TextClassifier for BrokenClassifier {
        async fn classify(&self, _text: &str) -> Result<ModerationScores, ClassifierError> {
            Err(ClassifierError::Provider("model not loaded".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    /// Classifier that omits the toxicity category.
    struct NoToxicityClassifier;

    #[async_trait]
    impl TextClassifier for NoToxicityClassifier {
        async fn classify(&self, _text: &str) -> Result<ModerationScores, ClassifierError> {
            ModerationScores::from_raw([("insult".to_string(), 0.9)])
        }

        fn name(&self) -> &str {
            "no-toxicity"
        }
    }

    #[test]
    fn validation_order_matches_the_contract() {
        assert!(matches!(
            validate_payload(b"{oops"),
            Err(ApiError::InvalidRequest)
        ));
        assert!(matches!(
            validate_payload(b"[1,2,3]"),
            Err(ApiError::InvalidPayload)
        ));
        assert_eq!(
            validate_payload(b"{}").unwrap_err().to_string(),
            "Missing 'text' field"
        );
        assert_eq!(
            validate_payload(br#"{"text":null}"#).unwrap_err().to_string(),
            "Missing 'text' field"
        );
        assert!(matches!(
            validate_payload(br#"{"text":7}"#),
            Err(ApiError::TypeMismatch)
        ));
        assert_eq!(
            validate_payload(br#"{"text":"   \n\t "}"#)
                .unwrap_err()
                .to_string(),
            "Text required"
        );
    }

    #[test]
    fn valid_text_is_returned_untrimmed() {
        let text = validate_payload(br#"{"text":"  hello  "}"#).unwrap();
        assert_eq!(text, "  hello  ");
    }

    #[tokio::test]
    async fn classifier_failure_becomes_moderation_failure() {
        let err = moderate(&BrokenClassifier, br#"{"text":"anything"}"#)
            .await
            .unwrap_err();
        match err {
            ApiError::ModerationFailure(detail) => {
                assert!(detail.contains("model not loaded"));
            }
            other => panic!("expected ModerationFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_toxicity_category_becomes_moderation_failure() {
        let err = moderate(&NoToxicityClassifier, br#"{"text":"anything"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ModerationFailure(_)));
    }

    #[tokio::test]
    async fn blank_text_never_reaches_the_classifier() {
        // BrokenClassifier would turn any call into a 500; blank text must
        // fail validation before that.
        let err = moderate(&BrokenClassifier, br#"{"text":"   "}"#)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Text required");
    }
}
