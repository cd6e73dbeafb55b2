//! Text classification module — toxicity scoring for the moderation endpoint.
//!
//! The actual inference is owned by an external collaborator; this module
//! defines the seam ([`TextClassifier`]) plus two providers and keeps the
//! score invariants in one place.
//!
//! # Public API
//!
//! - [`TextClassifier`] — async scoring seam injected into the HTTP layer
//! - [`ModerationScores`] — validated per-category scores
//! - [`ToxicityLabel`] — binary label derived from the `toxicity` score
//! - [`provider::build_classifier`] — provider dispatch by name
//!
//! # Providers
//!
//! - `"detoxify"` — HTTP scoring sidecar running the pretrained model
//! - `"lexicon"` — deterministic term-list scorer (offline, no external deps)

pub mod detoxify;
pub mod lexicon;
pub mod provider;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// The category set produced by the pretrained model.
pub const CATEGORIES: [&str; 6] = [
    "toxicity",
    "severe_toxicity",
    "obscene",
    "threat",
    "insult",
    "identity_attack",
];

/// Scores above this threshold on the `toxicity` category are labelled toxic.
pub const TOXICITY_THRESHOLD: f64 = 0.5;

/// Errors that can occur during classification.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Classifier output missing category: {0}")]
    MissingCategory(String),

    #[error("Classifier returned invalid score for {category}: {value}")]
    InvalidScore { category: String, value: f64 },
}

/// Per-category scores from one classification call.
///
/// Construction validates the invariant that every score is a finite float
/// in `[0, 1]`; providers hand in raw numbers and never bypass this. The
/// map is ordered so serialized output is stable.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ModerationScores(BTreeMap<String, f64>);

impl ModerationScores {
    /// Validate raw provider output into a score map.
    pub fn from_raw<I>(raw: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut scores = BTreeMap::new();
        for (category, value) in raw {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ClassifierError::InvalidScore { category, value });
            }
            scores.insert(category, value);
        }
        Ok(Self(scores))
    }

    /// Score for a single category, if present.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    /// The `toxicity` score; an output without it is a provider defect.
    pub fn toxicity(&self) -> Result<f64, ClassifierError> {
        self.get("toxicity")
            .ok_or_else(|| ClassifierError::MissingCategory("toxicity".to_string()))
    }

    /// Iterate over `(category, score)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Binary moderation label derived from the `toxicity` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToxicityLabel {
    Toxic,
    NonToxic,
}

impl ToxicityLabel {
    /// Threshold the `toxicity` score: strictly greater than 0.5 → toxic.
    pub fn from_scores(scores: &ModerationScores) -> Result<Self, ClassifierError> {
        Ok(if scores.toxicity()? > TOXICITY_THRESHOLD {
            Self::Toxic
        } else {
            Self::NonToxic
        })
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toxic => "toxic",
            Self::NonToxic => "non-toxic",
        }
    }
}

/// Scoring seam between the HTTP layer and whichever provider backs it.
///
/// Implementations must be safe to share across concurrently served
/// requests; the API holds one instance for the process lifetime.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Score a text against all categories.
    async fn classify(&self, text: &str) -> Result<ModerationScores, ClassifierError>;

    /// Provider name, for logs.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_with_toxicity(v: f64) -> ModerationScores {
        ModerationScores::from_raw([("toxicity".to_string(), v)]).unwrap()
    }

    #[test]
    fn from_raw_accepts_unit_interval_scores() {
        let scores = ModerationScores::from_raw([
            ("toxicity".to_string(), 0.0),
            ("insult".to_string(), 1.0),
            ("threat".to_string(), 0.37),
        ])
        .unwrap();
        assert_eq!(scores.get("toxicity"), Some(0.0));
        assert_eq!(scores.get("insult"), Some(1.0));
    }

    #[test]
    fn iteration_is_in_category_order() {
        let scores = ModerationScores::from_raw([
            ("toxicity".to_string(), 0.2),
            ("insult".to_string(), 0.1),
        ])
        .unwrap();
        let pairs: Vec<_> = scores.iter().collect();
        assert_eq!(pairs, vec![("insult", 0.1), ("toxicity", 0.2)]);
    }

    #[test]
    fn from_raw_rejects_out_of_range_and_non_finite() {
        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = ModerationScores::from_raw([("toxicity".to_string(), bad)]);
            assert!(
                matches!(result, Err(ClassifierError::InvalidScore { .. })),
                "expected InvalidScore for {bad}"
            );
        }
    }

    #[test]
    fn label_thresholds_strictly_above_half() {
        assert_eq!(
            ToxicityLabel::from_scores(&scores_with_toxicity(0.51)).unwrap(),
            ToxicityLabel::Toxic
        );
        // Exactly 0.5 is non-toxic.
        assert_eq!(
            ToxicityLabel::from_scores(&scores_with_toxicity(0.5)).unwrap(),
            ToxicityLabel::NonToxic
        );
        assert_eq!(
            ToxicityLabel::from_scores(&scores_with_toxicity(0.0)).unwrap(),
            ToxicityLabel::NonToxic
        );
    }

    #[test]
    fn missing_toxicity_category_is_an_error() {
        let scores = ModerationScores::from_raw([("insult".to_string(), 0.9)]).unwrap();
        assert!(matches!(
            ToxicityLabel::from_scores(&scores),
            Err(ClassifierError::MissingCategory(_))
        ));
    }

    #[test]
    fn label_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ToxicityLabel::NonToxic).unwrap(),
            "\"non-toxic\""
        );
        assert_eq!(ToxicityLabel::Toxic.as_str(), "toxic");
    }
}
