use skepesis_core::config::ObservabilityConfig;
use skepesis_core::errors::ScoringError;
use skepesis_core::models::SessionSummary;
use skepesis_observability::{events, init_from_config, init_tracing_with_filter, names};

#[test]
fn second_init_is_harmless() {
    let _ = init_from_config(&ObservabilityConfig::default());
    // A subscriber is now installed; further attempts report false instead of panicking.
    assert!(!init_tracing_with_filter("debug", true));
    skepesis_observability::init_tracing();
}

#[test]
fn events_emit_without_subscriber_panics() {
    events::session_summarized(&SessionSummary::empty());
    events::insights_generated(3, 12.5, 80.0, "analytical");
    events::confidence_rejected(&ScoringError::InvalidConfidenceValue {
        index: Some(2),
        value: 150.0,
    });
}

#[test]
fn span_macros_use_named_targets() {
    let span = skepesis_observability::summary_span!(4usize);
    let _guard = span.enter();
    assert_eq!(names::SUMMARY, "skepesis.summary");
    assert_eq!(names::ANALYSIS, "skepesis.analysis");
    let _analysis = skepesis_observability::analysis_span!(4usize);
}
