//! Lexicon classifier — deterministic term-list scoring.
//!
//! Produces repeatable scores with no external dependencies — useful for
//! testing and offline development. Each category counts hits from a small
//! word list; repeated calls with the same text always return the same
//! scores.

use async_trait::async_trait;

use super::{ClassifierError, ModerationScores, TextClassifier};

/// Insulting vocabulary.
const INSULT_TERMS: &[&str] = &["stupid", "ugly", "idiot", "dumb", "moron", "loser", "pathetic"];

/// Threatening vocabulary.
const THREAT_TERMS: &[&str] = &["kill", "murder", "hurt", "destroy", "strangle"];

/// Obscene vocabulary (kept mild for a demo lexicon).
const OBSCENE_TERMS: &[&str] = &["damn", "crap", "filth"];

/// Identity-attack vocabulary.
const IDENTITY_ATTACK_TERMS: &[&str] = &["subhuman", "vermin"];

/// Severe subset: terms that alone indicate severe toxicity.
const SEVERE_TERMS: &[&str] = &["kill", "murder", "strangle", "subhuman"];

/// Offline scoring provider backed by the term lists above.
#[derive(Debug, Default, Clone)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased alphanumeric tokens of the input.
    fn tokens(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }

    /// Number of tokens that appear in `terms`.
    fn hits(tokens: &[String], terms: &[&str]) -> usize {
        tokens.iter().filter(|t| terms.contains(&t.as_str())).count()
    }

    /// Map a hit count to a score: zero hits score 0, one hit lands above
    /// the toxicity threshold, further hits approach 1.
    fn saturate(hits: usize) -> f64 {
        1.0 - 0.25f64.powi(hits as i32)
    }

    fn score(text: &str) -> Result<ModerationScores, ClassifierError> {
        let tokens = Self::tokens(text);

        let insult = Self::hits(&tokens, INSULT_TERMS);
        let threat = Self::hits(&tokens, THREAT_TERMS);
        let obscene = Self::hits(&tokens, OBSCENE_TERMS);
        let identity = Self::hits(&tokens, IDENTITY_ATTACK_TERMS);
        let severe = Self::hits(&tokens, SEVERE_TERMS);
        // Toxicity aggregates every category list.
        let toxicity = insult + threat + obscene + identity;

        ModerationScores::from_raw([
            ("toxicity".to_string(), Self::saturate(toxicity)),
            ("severe_toxicity".to_string(), Self::saturate(severe)),
            ("obscene".to_string(), Self::saturate(obscene)),
            ("threat".to_string(), Self::saturate(threat)),
            ("insult".to_string(), Self::saturate(insult)),
            ("identity_attack".to_string(), Self::saturate(identity)),
        ])
    }
}

#[async_trait]
impl TextClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<ModerationScores, ClassifierError> {
        Self::score(text)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
