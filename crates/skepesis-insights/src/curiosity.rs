//! Curiosity score.
//!
//! Rewards responses where confidence and outcome are in productive
//! tension, plus thoughtful mid-range confidence:
//!
//! ```text
//! correct  && c < 50       → +(50 − c) / 50 × 25
//! !correct && c > 70       → +(c − 70) / 30 × 20
//! 40 <= c <= 60            → +10
//! score = min(100, points / (n × 30) × 100)
//! ```

use skepesis_core::Response;

const MAX_POINTS_PER_RESPONSE: f64 = 30.0;

/// Curiosity score in [0, 100]. Empty input scores 0.
pub fn curiosity_score(responses: &[Response]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }

    let points: f64 = responses.iter().map(points_for).sum();
    let max_possible = responses.len() as f64 * MAX_POINTS_PER_RESPONSE;
    (points / max_possible * 100.0).min(100.0)
}

fn points_for(response: &Response) -> f64 {
    let c = response.confidence;
    let mut points = 0.0;
    // Low confidence but correct: exploring despite uncertainty.
    if response.is_correct && c < 50.0 {
        points += (50.0 - c) / 50.0 * 25.0;
    }
    // High confidence but wrong: a recalibration opportunity.
    if !response.is_correct && c > 70.0 {
        points += (c - 70.0) / 30.0 * 20.0;
    }
    if (40.0..=60.0).contains(&c) {
        points += 10.0;
    }
    points
}
