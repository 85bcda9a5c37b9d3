use rayon::prelude::*;

use skepesis_core::errors::{ScoringError, SkepesisResult};
use skepesis_core::models::{CalibrationResult, PatternCounts, SessionSummary};
use skepesis_core::traits::ICalibrator;
use skepesis_core::Response;

use crate::aggregator::{self, validate};
use crate::{alignment, classifier};

/// Stateless calibration service implementing [`ICalibrator`].
/// Every method delegates to the free functions in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibrationEngine;

impl CalibrationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single raw pair.
    pub fn classify_pair(&self, confidence: f64, is_correct: bool) -> CalibrationResult {
        CalibrationResult {
            pattern: classifier::classify(confidence, is_correct),
            aligned: alignment::is_aligned(confidence, is_correct),
        }
    }

    /// Classify every response, rejecting the session on the first
    /// out-of-range confidence.
    pub fn classify_all(&self, responses: &[Response]) -> Result<Vec<CalibrationResult>, ScoringError> {
        responses
            .iter()
            .enumerate()
            .map(|(index, r)| validate(index, r).map(|c| self.classify_pair(c.value(), r.is_correct)))
            .collect()
    }

    /// Calibration matrix for a session.
    pub fn pattern_counts(&self, responses: &[Response]) -> Result<PatternCounts, ScoringError> {
        aggregator::pattern_counts(responses)
    }

    /// Summarize many independent sessions in parallel.
    ///
    /// One result per session, in input order. A bad session does not
    /// affect the others.
    pub fn summarize_many(
        &self,
        sessions: &[Vec<Response>],
    ) -> Vec<Result<SessionSummary, ScoringError>> {
        sessions
            .par_iter()
            .map(|session| aggregator::summarize(session))
            .collect()
    }
}

impl ICalibrator for CalibrationEngine {
    fn classify(&self, response: &Response) -> CalibrationResult {
        self.classify_pair(response.confidence, response.is_correct)
    }

    fn summarize(&self, responses: &[Response]) -> SkepesisResult<SessionSummary> {
        Ok(aggregator::summarize(responses)?)
    }
}
