//! Structured log events for key analysis operations.
//!
//! Each function emits a `tracing` event with structured fields.

use skepesis_core::errors::ScoringError;
use skepesis_core::models::SessionSummary;

/// Log a computed session summary.
pub fn session_summarized(summary: &SessionSummary) {
    tracing::info!(
        event = "session_summarized",
        total = summary.total_count,
        accuracy_percent = summary.accuracy_percent,
        alignment_percent = summary.alignment_percent,
        "session summarized"
    );
}

/// Log a finished insight report.
pub fn insights_generated(total: usize, curiosity_score: f64, calibration_score: f64, style: &str) {
    tracing::info!(
        event = "insights_generated",
        total = total,
        curiosity_score = curiosity_score,
        calibration_score = calibration_score,
        learning_style = %style,
        "insights generated"
    );
}

/// Log a session rejected for an out-of-range confidence.
pub fn confidence_rejected(err: &ScoringError) {
    let ScoringError::InvalidConfidenceValue { index, value } = err;
    tracing::warn!(
        event = "confidence_rejected",
        index = ?index,
        value = *value,
        "confidence outside [0, 100]; session rejected"
    );
}
