/// Skepesis version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the confidence scale. The lower bound is 0.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Confidence at or above which a response is in the high band.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 75.0;

/// Confidence below which a response is in the low band.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 50.0;

/// Single split point used by the alignment predicate.
pub const ALIGNMENT_THRESHOLD: f64 = 70.0;

/// Category assigned to responses stored without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Difficulty assigned to responses stored without one.
pub const DEFAULT_DIFFICULTY: &str = "medium";
