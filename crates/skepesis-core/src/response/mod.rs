pub mod confidence;
pub mod grading;
pub mod record;

pub use confidence::{Confidence, ConfidenceBand};
pub use record::ResponseRecord;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One answered question as seen by the scoring engine.
///
/// `confidence` is kept as the raw number the learner submitted so that
/// the aggregator can reject out-of-range values with their position.
/// `meta` is carried through for reporting and never affects scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    /// Self-reported certainty on the 0–100 scale.
    pub confidence: f64,
    /// Whether the answer matched the expected answer.
    pub is_correct: bool,
    #[serde(default)]
    pub meta: ResponseMeta,
}

impl Response {
    /// Create a response with empty metadata.
    pub fn new(confidence: f64, is_correct: bool) -> Self {
        Self {
            confidence,
            is_correct,
            meta: ResponseMeta::default(),
        }
    }

    /// Attach reporting metadata.
    pub fn with_meta(mut self, meta: ResponseMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Validate the confidence value.
    pub fn checked_confidence(&self) -> Result<Confidence, crate::errors::ScoringError> {
        Confidence::try_new(self.confidence)
    }
}

/// Opaque passthrough fields used by reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseMeta {
    #[ts(type = "number | null")]
    pub question_id: Option<i64>,
    pub question_text: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Seconds spent on the question.
    #[serde(default)]
    pub time_spent: u32,
}
