use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Behavioral pattern of a single response, from the 50/75 confidence
/// banding combined with correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pattern {
    /// Correct with confidence >= 75.
    ConfidentCorrect,
    /// Correct with confidence < 50.
    Underconfident,
    /// Incorrect with confidence >= 75.
    Overconfident,
    /// Incorrect with confidence < 50.
    Guessing,
    /// Confidence in [50, 75), either outcome.
    Calibrated,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::ConfidentCorrect,
        Pattern::Underconfident,
        Pattern::Overconfident,
        Pattern::Guessing,
        Pattern::Calibrated,
    ];

    /// Stable wire name, e.g. `CONFIDENT_CORRECT`.
    pub fn as_str(self) -> &'static str {
        match self {
            Pattern::ConfidentCorrect => "CONFIDENT_CORRECT",
            Pattern::Underconfident => "UNDERCONFIDENT",
            Pattern::Overconfident => "OVERCONFIDENT",
            Pattern::Guessing => "GUESSING",
            Pattern::Calibrated => "CALIBRATED",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-pattern response counts for one session (the calibration matrix).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternCounts {
    pub confident_correct: usize,
    pub underconfident: usize,
    pub overconfident: usize,
    pub guessing: usize,
    pub calibrated: usize,
}

impl PatternCounts {
    /// Count one more response with the given pattern.
    pub fn record(&mut self, pattern: Pattern) {
        *self.slot_mut(pattern) += 1;
    }

    /// Responses recorded for a pattern.
    pub fn get(&self, pattern: Pattern) -> usize {
        match pattern {
            Pattern::ConfidentCorrect => self.confident_correct,
            Pattern::Underconfident => self.underconfident,
            Pattern::Overconfident => self.overconfident,
            Pattern::Guessing => self.guessing,
            Pattern::Calibrated => self.calibrated,
        }
    }

    /// Total responses recorded.
    pub fn total(&self) -> usize {
        Pattern::ALL.iter().map(|p| self.get(*p)).sum()
    }

    fn slot_mut(&mut self, pattern: Pattern) -> &mut usize {
        match pattern {
            Pattern::ConfidentCorrect => &mut self.confident_correct,
            Pattern::Underconfident => &mut self.underconfident,
            Pattern::Overconfident => &mut self.overconfident,
            Pattern::Guessing => &mut self.guessing,
            Pattern::Calibrated => &mut self.calibrated,
        }
    }
}

impl FromIterator<Pattern> for PatternCounts {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        let mut counts = PatternCounts::default();
        for pattern in iter {
            counts.record(pattern);
        }
        counts
    }
}
