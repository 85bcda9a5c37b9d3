use serde::Deserialize;
use skepesis_calibration::*;
use skepesis_core::errors::ScoringError;
use skepesis_core::traits::ICalibrator;
use skepesis_core::{Response, ResponseRecord, SkepesisError};

fn r(confidence: f64, is_correct: bool) -> Response {
    Response::new(confidence, is_correct)
}

#[derive(Debug, Deserialize)]
struct CalibrationFixture {
    description: String,
    responses: Vec<ResponseRecord>,
    expected: Option<ExpectedSummary>,
    expected_error: Option<ExpectedError>,
}

#[derive(Debug, Deserialize)]
struct ExpectedSummary {
    accuracy_percent: u8,
    alignment_percent: u8,
    total_count: usize,
    patterns: Vec<Pattern>,
    aligned: Vec<bool>,
}

#[derive(Debug, Deserialize)]
struct ExpectedError {
    index: usize,
    value: f64,
}

// ── Pattern classifier ──────────────────────────────────────────────────

#[test]
fn full_confidence_correct_is_confident_correct() {
    assert_eq!(classify(100.0, true), Pattern::ConfidentCorrect);
}

#[test]
fn zero_confidence_correct_is_underconfident() {
    assert_eq!(classify(0.0, true), Pattern::Underconfident);
}

#[test]
fn full_confidence_wrong_is_overconfident() {
    assert_eq!(classify(100.0, false), Pattern::Overconfident);
}

#[test]
fn zero_confidence_wrong_is_guessing() {
    assert_eq!(classify(0.0, false), Pattern::Guessing);
}

#[test]
fn high_threshold_is_inclusive() {
    assert_eq!(classify(75.0, true), Pattern::ConfidentCorrect);
}

#[test]
fn low_threshold_is_exclusive() {
    assert_eq!(classify(50.0, true), Pattern::Calibrated);
}

// ── Alignment predicate ─────────────────────────────────────────────────

#[test]
fn alignment_split_at_seventy() {
    assert!(is_aligned(70.0, true));
    assert!(!is_aligned(69.0, true));
    assert!(!is_aligned(70.0, false));
    assert!(is_aligned(30.0, false));
}

#[test]
fn pattern_and_alignment_disagree_in_mid_band() {
    let engine = CalibrationEngine::new();

    // [50, 70) and correct: calibrated but not aligned.
    for c in [50.0, 60.0, 69.0] {
        let result = engine.classify(&r(c, true));
        assert_eq!(result.pattern, Pattern::Calibrated, "c={c}");
        assert!(!result.aligned, "c={c}");
    }
    // [70, 75) and wrong: calibrated but not aligned.
    for c in [70.0, 72.5, 74.0] {
        let result = engine.classify(&r(c, false));
        assert_eq!(result.pattern, Pattern::Calibrated, "c={c}");
        assert!(!result.aligned, "c={c}");
    }
}

// ── Session aggregator ──────────────────────────────────────────────────

#[test]
fn empty_input_yields_zero_summary() {
    let summary = summarize(&[]).unwrap();
    assert_eq!(summary.accuracy_percent, 0);
    assert_eq!(summary.alignment_percent, 0);
    assert_eq!(summary.total_count, 0);
}

#[test]
fn four_corner_session() {
    let responses = [r(90.0, true), r(20.0, false), r(80.0, false), r(40.0, true)];
    let summary = summarize(&responses).unwrap();
    assert_eq!(summary.accuracy_percent, 50);
    assert_eq!(summary.alignment_percent, 50);
    assert_eq!(summary.total_count, 4);
    assert_eq!(summary.correct_count, 2);
    assert_eq!(summary.aligned_count, 2);
}

#[test]
fn out_of_range_confidence_is_rejected_not_clamped() {
    let err = summarize(&[r(150.0, true)]).unwrap_err();
    assert_eq!(
        err,
        ScoringError::InvalidConfidenceValue {
            index: Some(0),
            value: 150.0
        }
    );
}

#[test]
fn first_offending_index_is_reported() {
    let responses = [r(10.0, false), r(100.0, true), r(-1.0, true), r(101.0, false)];
    match summarize(&responses).unwrap_err() {
        ScoringError::InvalidConfidenceValue { index, value } => {
            assert_eq!(index, Some(2));
            assert_eq!(value, -1.0);
        }
    }
}

#[test]
fn nan_confidence_is_rejected() {
    assert!(summarize(&[r(f64::NAN, true)]).is_err());
}

#[test]
fn order_does_not_change_totals() {
    let forward = [r(90.0, true), r(20.0, false), r(80.0, false), r(40.0, true), r(65.0, true)];
    let mut backward = forward.clone();
    backward.reverse();
    assert_eq!(summarize(&forward).unwrap(), summarize(&backward).unwrap());
}

#[test]
fn trait_summarize_wraps_scoring_error() {
    let engine = CalibrationEngine::new();
    let err = ICalibrator::summarize(&engine, &[r(200.0, false)]).unwrap_err();
    assert!(matches!(err, SkepesisError::Scoring(_)));
}

#[test]
fn classify_all_validates_like_summarize() {
    let engine = CalibrationEngine::new();
    let ok = engine.classify_all(&[r(90.0, true), r(20.0, false)]).unwrap();
    assert_eq!(ok[0].pattern, Pattern::ConfidentCorrect);
    assert_eq!(ok[1].pattern, Pattern::Guessing);

    let err = engine.classify_all(&[r(90.0, true), r(1000.0, false)]).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidConfidenceValue { index: Some(1), .. }));
}

#[test]
fn pattern_counts_match_classification() {
    let responses = [r(90.0, true), r(95.0, true), r(20.0, false), r(60.0, false)];
    let counts = pattern_counts(&responses).unwrap();
    assert_eq!(counts.get(Pattern::ConfidentCorrect), 2);
    assert_eq!(counts.get(Pattern::Guessing), 1);
    assert_eq!(counts.get(Pattern::Calibrated), 1);
    assert_eq!(counts.total(), responses.len());
}

#[test]
fn summarize_many_keeps_order_and_isolates_failures() {
    let engine = CalibrationEngine::new();
    let sessions = vec![
        vec![r(90.0, true)],
        vec![r(500.0, true)],
        vec![],
        vec![r(10.0, true), r(10.0, false)],
    ];
    let results = engine.summarize_many(&sessions);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().accuracy_percent, 100);
    assert!(results[1].is_err());
    assert!(results[2].as_ref().unwrap().is_empty());
    assert_eq!(results[3].as_ref().unwrap().accuracy_percent, 50);
    assert_eq!(results[3].as_ref().unwrap().alignment_percent, 50);
}

// ── Golden sessions ─────────────────────────────────────────────────────

#[test]
fn golden_sessions_match_expected() {
    let engine = CalibrationEngine::new();
    let files = test_fixtures::list_fixtures("golden/calibration");
    assert!(!files.is_empty());

    for file in files {
        let fixture: CalibrationFixture =
            test_fixtures::load_fixture(&test_fixtures::relative_to_root(&file));
        let responses: Vec<Response> = fixture.responses.into_iter().map(Response::from).collect();

        match (fixture.expected, fixture.expected_error) {
            (Some(expected), None) => {
                let summary = summarize(&responses).unwrap();
                assert_eq!(summary.accuracy_percent, expected.accuracy_percent, "{}", fixture.description);
                assert_eq!(summary.alignment_percent, expected.alignment_percent, "{}", fixture.description);
                assert_eq!(summary.total_count, expected.total_count, "{}", fixture.description);

                let results = engine.classify_all(&responses).unwrap();
                let patterns: Vec<Pattern> = results.iter().map(|c| c.pattern).collect();
                let aligned: Vec<bool> = results.iter().map(|c| c.aligned).collect();
                assert_eq!(patterns, expected.patterns, "{}", fixture.description);
                assert_eq!(aligned, expected.aligned, "{}", fixture.description);
            }
            (None, Some(expected)) => {
                let err = summarize(&responses).unwrap_err();
                assert_eq!(
                    err,
                    ScoringError::InvalidConfidenceValue {
                        index: Some(expected.index),
                        value: expected.value,
                    },
                    "{}",
                    fixture.description
                );
            }
            _ => panic!("fixture {} must have exactly one expectation", file.display()),
        }
    }
}
