//! # skepesis-insights
//!
//! Turns a validated attempt into a [`CognitiveInsights`] report: how the
//! learner learns, not only what they got right.
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`curiosity`] | curiosity score (0–100) |
//! | [`alignment_score`] | continuous confidence/accuracy alignment |
//! | [`calibration_score`] | bucketed calibration error |
//! | [`gaps`] | overconfident errors, hidden strengths, per-category stats |
//! | [`patterns`] | thinking speed, risk behavior, learning approach |
//! | [`moments`] | notable questions worth reflecting on |
//! | [`prompts`] | learning style, suggestions, reflection prompts |
//! | [`scoring`] | weighted score and cohort percentile |
//!
//! The metric functions assume confidence has already been validated;
//! [`InsightsEngine::analyze`] runs the calibration aggregator first and
//! refuses the whole attempt on an out-of-range value.

pub mod alignment_score;
pub mod calibration_score;
pub mod curiosity;
pub mod engine;
pub mod gaps;
pub mod moments;
pub mod patterns;
pub mod prompts;
pub mod scoring;

mod util;

pub use engine::InsightsEngine;
pub use skepesis_core::models::CognitiveInsights;
