//! # skepesis-core
//!
//! Foundation crate for the Skepesis quiz analysis system.
//! Defines the response types, result models, traits, errors, config, and
//! constants shared by the calibration engine and the insight analyzers.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod response;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SkepesisConfig;
pub use errors::{ScoringError, SkepesisError, SkepesisResult};
pub use models::{CalibrationResult, CognitiveInsights, Pattern, PatternCounts, SessionSummary};
pub use response::{Confidence, ConfidenceBand, Response, ResponseMeta, ResponseRecord};
