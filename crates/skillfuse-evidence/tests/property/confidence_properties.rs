use proptest::prelude::*;
use skillfuse_evidence::ConfidenceEstimator;
use test_fixtures::ScriptedModel;

proptest! {
    #[test]
    fn estimate_stays_in_bounds(
        prediction in -1.0f64..2.0,
        features in prop::collection::vec(prop_oneof![Just(0.0f64), 0.0f64..5.0], 1..8),
        members in prop::collection::vec(0.0f64..1.0, 0..6),
    ) {
        let names: Vec<String> = (0..features.len()).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let model = ScriptedModel::new(&refs, prediction).with_members(&members);

        let c = ConfidenceEstimator::new().estimate(&model, &features, prediction, features.len());
        prop_assert!((0.3..=0.95).contains(&c), "confidence {c}");
    }

    #[test]
    fn fallback_stays_in_fallback_range(prediction in prop::num::f64::ANY) {
        let model = ScriptedModel::new(&["a", "b"], 0.5);
        // wrong length forces the fallback
        let c = ConfidenceEstimator::new().estimate(&model, &[1.0], prediction, 2);
        prop_assert!((0.5..=0.85).contains(&c), "confidence {c}");
    }
}
