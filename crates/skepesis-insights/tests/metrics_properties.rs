use proptest::prelude::*;
use skepesis_core::{Response, ResponseMeta};
use skepesis_insights::{alignment_score, calibration_score, curiosity, scoring};

fn arb_response() -> impl Strategy<Value = Response> {
    (0.0f64..=100.0, any::<bool>(), 0u32..120).prop_map(|(c, ok, t)| {
        Response::new(c, ok).with_meta(ResponseMeta {
            time_spent: t,
            ..Default::default()
        })
    })
}

proptest! {
    #[test]
    fn bounded_metrics_stay_in_range(
        responses in proptest::collection::vec(arb_response(), 0..48)
    ) {
        let c = curiosity::curiosity_score(&responses);
        prop_assert!((0.0..=100.0).contains(&c), "curiosity {}", c);

        let a = alignment_score::confidence_accuracy_alignment(&responses);
        prop_assert!((0.0..=100.0).contains(&a), "alignment {}", a);

        let k = calibration_score::calibration_score(&responses);
        prop_assert!((0.0..=100.0).contains(&k), "calibration {}", k);

        let w = scoring::weighted_score(&responses);
        prop_assert!(w <= 100.0, "weighted {}", w);
    }

    #[test]
    fn percentile_never_exceeds_hundred(
        score in 0.0f64..100.0,
        cohort in proptest::collection::vec(0.0f64..100.0, 0..32)
    ) {
        prop_assert!(scoring::percentile(score, &cohort) <= 100);
    }
}
