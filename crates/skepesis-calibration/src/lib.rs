//! # skepesis-calibration
//!
//! Pure, stateless scoring of quiz responses against stated confidence.
//!
//! ## Two measures
//!
//! | Measure | Thresholds | Output |
//! |---------|-----------|--------|
//! | Pattern | 50 / 75 bands × correctness | one of five [`Pattern`]s |
//! | Alignment | single split at 70 | `bool` |
//!
//! The two are independent and disagree for some responses (e.g. 60%
//! confident and correct is `Calibrated` but not aligned). Call sites pick
//! the one they need.
//!
//! Nothing here logs or holds state; every function is safe to call from
//! any number of threads at once.

pub mod aggregator;
pub mod alignment;
pub mod classifier;
pub mod engine;

pub use aggregator::{pattern_counts, percent, summarize};
pub use alignment::is_aligned;
pub use classifier::classify;
pub use engine::CalibrationEngine;

pub use skepesis_core::models::{CalibrationResult, Pattern, PatternCounts, SessionSummary};
