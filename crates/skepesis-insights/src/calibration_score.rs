//! Bucketed calibration score.
//!
//! Responses are grouped by confidence and each group's observed accuracy
//! is compared with the accuracy its confidence implies:
//!
//! | Bucket | Confidence | Expected accuracy |
//! |--------|-----------|-------------------|
//! | low | c < 40 | 20% |
//! | medium | 40 ≤ c ≤ 70 | 55% |
//! | high | c > 70 | 85% |
//!
//! Score = `max(0, 100 − mean |actual − expected|)` over populated buckets.

use skepesis_core::Response;

use crate::util::share_percent;

struct Bucket {
    expected: f64,
    correct: usize,
    total: usize,
}

impl Bucket {
    const fn new(expected: f64) -> Self {
        Self {
            expected,
            correct: 0,
            total: 0,
        }
    }

    fn error(&self) -> Option<f64> {
        (self.total > 0).then(|| (share_percent(self.correct, self.total) - self.expected).abs())
    }
}

/// Calibration score in [0, 100]; 100 is perfect. Empty input scores 0.
pub fn calibration_score(responses: &[Response]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }

    let mut buckets = [Bucket::new(20.0), Bucket::new(55.0), Bucket::new(85.0)];
    for r in responses {
        let slot = if r.confidence < 40.0 {
            0
        } else if r.confidence <= 70.0 {
            1
        } else {
            2
        };
        buckets[slot].total += 1;
        if r.is_correct {
            buckets[slot].correct += 1;
        }
    }

    let errors: Vec<f64> = buckets.iter().filter_map(Bucket::error).collect();
    let avg_error = errors.iter().sum::<f64>() / errors.len() as f64;
    (100.0 - avg_error).max(0.0)
}
