use crate::errors::SkepesisResult;
use crate::models::{CalibrationResult, SessionSummary};
use crate::response::Response;

/// Confidence calibration scoring.
pub trait ICalibrator: Send + Sync {
    /// Classify one response. Total: never fails.
    fn classify(&self, response: &Response) -> CalibrationResult;

    /// Fold a session into accuracy and alignment percentages.
    /// Fails on the first out-of-range confidence.
    fn summarize(&self, responses: &[Response]) -> SkepesisResult<SessionSummary>;
}
