use proptest::prelude::*;
use skepesis_calibration::*;
use skepesis_core::Response;

fn arb_response() -> impl Strategy<Value = Response> {
    (0.0f64..=100.0, any::<bool>()).prop_map(|(c, ok)| Response::new(c, ok))
}

proptest! {
    #[test]
    fn mid_band_always_calibrated(c in 50.0f64..75.0, ok in any::<bool>()) {
        prop_assert_eq!(classify(c, ok), Pattern::Calibrated);
    }

    #[test]
    fn high_band_follows_correctness(c in 75.0f64..=100.0, ok in any::<bool>()) {
        let expected = if ok { Pattern::ConfidentCorrect } else { Pattern::Overconfident };
        prop_assert_eq!(classify(c, ok), expected);
    }

    #[test]
    fn low_band_follows_correctness(c in 0.0f64..50.0, ok in any::<bool>()) {
        let expected = if ok { Pattern::Underconfident } else { Pattern::Guessing };
        prop_assert_eq!(classify(c, ok), expected);
    }

    #[test]
    fn correct_below_seventy_never_aligned(c in 0.0f64..70.0) {
        prop_assert!(!is_aligned(c, true));
        prop_assert!(is_aligned(c, false));
    }

    #[test]
    fn summary_is_deterministic_and_bounded(
        responses in proptest::collection::vec(arb_response(), 0..64)
    ) {
        let first = summarize(&responses).unwrap();
        let second = summarize(&responses).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.accuracy_percent <= 100);
        prop_assert!(first.alignment_percent <= 100);
        prop_assert_eq!(first.total_count, responses.len());
        prop_assert_eq!(
            first.correct_count,
            responses.iter().filter(|r| r.is_correct).count()
        );
    }

    #[test]
    fn pattern_counts_cover_every_response(
        responses in proptest::collection::vec(arb_response(), 0..64)
    ) {
        let counts = pattern_counts(&responses).unwrap();
        prop_assert_eq!(counts.total(), responses.len());
    }

    #[test]
    fn any_out_of_range_value_fails_the_session(
        responses in proptest::collection::vec(arb_response(), 1..32),
        bad in prop_oneof![100.001f64..1e6, -1e6f64..-0.001],
        at in any::<prop::sample::Index>(),
    ) {
        let mut responses = responses;
        let i = at.index(responses.len());
        responses[i].confidence = bad;
        prop_assert!(summarize(&responses).is_err());
    }
}
