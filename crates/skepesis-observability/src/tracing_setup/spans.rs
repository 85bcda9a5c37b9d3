//! Span definitions per operation: summary and insight analysis.

/// Create a session summary span.
#[macro_export]
macro_rules! summary_span {
    ($response_count:expr) => {
        tracing::info_span!("skepesis.summary", response_count = $response_count)
    };
}

/// Create an insight analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($response_count:expr) => {
        tracing::info_span!("skepesis.analysis", response_count = $response_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUMMARY: &str = "skepesis.summary";
    pub const ANALYSIS: &str = "skepesis.analysis";
}
