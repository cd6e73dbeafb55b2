//! Wire models for the API surface.
//!
//! Hand-written serde structs; the field names ARE the wire contract, so no
//! rename attributes.

use serde::Serialize;

use modguard_core::classifier::{ModerationScores, ToxicityLabel};

/// `POST /api/login` success body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: String,
    pub token: String,
}

/// `GET /api/protected` success body.
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
}

/// `POST /api/moderate` success body.
#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    /// The moderated text, echoed back untrimmed.
    pub text: String,
    /// Binary label derived from the toxicity score.
    pub toxicity: ToxicityLabel,
    /// Per-category scores from the classifier.
    pub toxicity_scores: ModerationScores,
}

/// Failure body for every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
