use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants;
use crate::errors::ScoringError;

/// Confidence on the 0–100 scale.
///
/// Values outside the range are rejected, never clamped. A 0.0–1.0 fraction
/// is not rescaled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// High band threshold (inclusive).
    pub const HIGH: f64 = constants::HIGH_CONFIDENCE_THRESHOLD;
    /// Low band threshold (exclusive).
    pub const LOW: f64 = constants::LOW_CONFIDENCE_THRESHOLD;
    /// Alignment split point (inclusive on the confident side).
    pub const ALIGNED: f64 = constants::ALIGNMENT_THRESHOLD;
    /// Top of the scale.
    pub const MAX: f64 = constants::MAX_CONFIDENCE;

    /// Create a new Confidence, rejecting non-finite or out-of-range values.
    pub fn try_new(value: f64) -> Result<Self, ScoringError> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoringError::InvalidConfidenceValue { index: None, value })
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Which of the three confidence bands this value falls in.
    pub fn band(self) -> ConfidenceBand {
        ConfidenceBand::of(self.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ScoringError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}

/// Partition of the confidence axis: [0,50) low, [50,75) mid, [75,100] high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Low,
    Mid,
    High,
}

impl ConfidenceBand {
    /// Band of a raw confidence value. Values above 100 land in `High`;
    /// range checks belong to [`Confidence::try_new`].
    pub fn of(confidence: f64) -> Self {
        if confidence >= Confidence::HIGH {
            Self::High
        } else if confidence < Confidence::LOW {
            Self::Low
        } else {
            Self::Mid
        }
    }
}
