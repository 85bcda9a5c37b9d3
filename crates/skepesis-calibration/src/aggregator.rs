use skepesis_core::errors::ScoringError;
use skepesis_core::models::{PatternCounts, SessionSummary};
use skepesis_core::{Confidence, Response};

use crate::{alignment, classifier};

/// Fold a session into a [`SessionSummary`] in a single pass.
///
/// Every confidence must lie in [0, 100]. The first violation fails the
/// whole computation with its index; no partial summary is produced.
/// An empty slice yields [`SessionSummary::empty`].
pub fn summarize(responses: &[Response]) -> Result<SessionSummary, ScoringError> {
    let mut correct_count = 0usize;
    let mut aligned_count = 0usize;

    for (index, response) in responses.iter().enumerate() {
        let confidence = validate(index, response)?;
        if response.is_correct {
            correct_count += 1;
        }
        if alignment::is_aligned(confidence.value(), response.is_correct) {
            aligned_count += 1;
        }
    }

    let total_count = responses.len();
    Ok(SessionSummary {
        accuracy_percent: percent(correct_count, total_count),
        alignment_percent: percent(aligned_count, total_count),
        total_count,
        correct_count,
        aligned_count,
    })
}

/// Histogram of patterns over a session, validated like [`summarize`].
pub fn pattern_counts(responses: &[Response]) -> Result<PatternCounts, ScoringError> {
    responses
        .iter()
        .enumerate()
        .map(|(index, r)| {
            validate(index, r).map(|c| classifier::classify(c.value(), r.is_correct))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|patterns| patterns.into_iter().collect())
}

/// `round(100 * count / total)` with halves rounded up; 0 when `total` is 0.
///
/// Integer arithmetic only, so 1/8 (12.5%) is always 13 and never subject
/// to float representation.
pub fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = count.min(total) as u128;
    let total = total as u128;
    ((200 * count + total) / (2 * total)) as u8
}

pub(crate) fn validate(index: usize, response: &Response) -> Result<Confidence, ScoringError> {
    response.checked_confidence().map_err(|e| e.at_index(index))
}
