//! Weighted score and cohort percentile.

use skepesis_core::Response;

const CORRECT_POINTS: f64 = 100.0;
const CONFIDENT_CORRECT_BONUS: f64 = 10.0;
const OVERCONFIDENT_PENALTY: f64 = -15.0;
const UNDERCONFIDENT_CORRECT_BONUS: f64 = 5.0;
const MAX_POINTS_PER_RESPONSE: f64 = CORRECT_POINTS + CONFIDENT_CORRECT_BONUS;

/// Correctness score adjusted for confidence, capped at 100.
///
/// 100 per correct answer, +10 when correct above 70% confidence, −15 when
/// wrong above 70%, +5 when correct below 40%. Normalized by the best
/// possible total (n × 110). Penalties can push a session below 0.
/// Empty input scores 0.
pub fn weighted_score(responses: &[Response]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }

    let total: f64 = responses
        .iter()
        .map(|r| {
            let base = if r.is_correct { CORRECT_POINTS } else { 0.0 };
            let factor = match (r.is_correct, r.confidence) {
                (true, c) if c > 70.0 => CONFIDENT_CORRECT_BONUS,
                (false, c) if c > 70.0 => OVERCONFIDENT_PENALTY,
                (true, c) if c < 40.0 => UNDERCONFIDENT_CORRECT_BONUS,
                _ => 0.0,
            };
            base + factor
        })
        .sum();

    let max_possible = responses.len() as f64 * MAX_POINTS_PER_RESPONSE;
    (total / max_possible * 100.0).min(100.0)
}

/// Percentile rank of `score` within `cohort`: the share of the cohort
/// strictly below it, floored. An empty cohort ranks everyone at 50.
pub fn percentile(score: f64, cohort: &[f64]) -> u8 {
    if cohort.is_empty() {
        return 50;
    }
    let below = cohort.iter().filter(|s| **s < score).count();
    (below * 100 / cohort.len()) as u8
}
