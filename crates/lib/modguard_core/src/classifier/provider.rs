//! Provider dispatch — builds the classifier named in configuration.

use std::sync::Arc;

use super::detoxify::DetoxifyClassifier;
use super::lexicon::LexiconClassifier;
use super::{ClassifierError, TextClassifier};

/// Build a classifier by provider name.
///
/// - `"detoxify"` → HTTP sidecar at `detoxify_url`
/// - `"lexicon"` → deterministic offline term lists
pub fn build_classifier(
    provider: &str,
    detoxify_url: &str,
) -> Result<Arc<dyn TextClassifier>, ClassifierError> {
    match provider {
        "detoxify" => Ok(Arc::new(DetoxifyClassifier::new(detoxify_url))),
        "lexicon" => Ok(Arc::new(LexiconClassifier::new())),
        other => Err(ClassifierError::UnsupportedProvider(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_build() {
        let lexicon = build_classifier("lexicon", "http://127.0.0.1:9100").unwrap();
        assert_eq!(lexicon.name(), "lexicon");

        let detoxify = build_classifier("detoxify", "http://127.0.0.1:9100").unwrap();
        assert_eq!(detoxify.name(), "detoxify");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(matches!(
            build_classifier("perspective", "http://127.0.0.1:9100"),
            Err(ClassifierError::UnsupportedProvider(_))
        ));
    }
}
