use skepesis_core::models::*;
use skepesis_core::{Response, ResponseMeta};

#[test]
fn pattern_serializes_screaming_snake_case() {
    let json = serde_json::to_string(&Pattern::ConfidentCorrect).unwrap();
    assert_eq!(json, "\"CONFIDENT_CORRECT\"");
    let back: Pattern = serde_json::from_str("\"GUESSING\"").unwrap();
    assert_eq!(back, Pattern::Guessing);
}

#[test]
fn pattern_display_matches_wire_name() {
    for pattern in Pattern::ALL {
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json.trim_matches('"'), pattern.to_string());
    }
}

#[test]
fn pattern_counts_collect_and_total() {
    let counts: PatternCounts = [
        Pattern::Calibrated,
        Pattern::Calibrated,
        Pattern::Guessing,
        Pattern::Overconfident,
    ]
    .into_iter()
    .collect();
    assert_eq!(counts.get(Pattern::Calibrated), 2);
    assert_eq!(counts.get(Pattern::Guessing), 1);
    assert_eq!(counts.get(Pattern::ConfidentCorrect), 0);
    assert_eq!(counts.total(), 4);
}

#[test]
fn empty_summary_is_all_zero() {
    let summary = SessionSummary::empty();
    assert!(summary.is_empty());
    assert_eq!(summary.accuracy_percent, 0);
    assert_eq!(summary.alignment_percent, 0);
}

#[test]
fn response_meta_defaults_when_absent() {
    let response: Response =
        serde_json::from_str(r#"{"confidence": 55, "is_correct": true}"#).unwrap();
    assert_eq!(response.meta, ResponseMeta::default());
    assert_eq!(response.confidence, 55.0);
}

#[test]
fn learning_moment_kind_uses_type_key() {
    let moment = LearningMoment {
        kind: LearningMomentKind::HiddenMastery,
        title: "t".into(),
        description: "d".into(),
        lesson: "l".into(),
    };
    let value = serde_json::to_value(&moment).unwrap();
    assert_eq!(value["type"], "hidden_mastery");
}
