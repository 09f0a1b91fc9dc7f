use proptest::prelude::*;
use skillfuse_core::errors::ConfigurationError;
use skillfuse_core::SkillWeightVector;

proptest! {
    // Any vector that constructs satisfies the sum invariant.
    #[test]
    fn valid_vectors_sum_near_one(
        m in 0.0f64..=1.0,
        l in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        c in 0.0f64..=1.0,
    ) {
        if let Ok(v) = SkillWeightVector::new(m, l, b, c) {
            prop_assert!(v.sum() >= 0.99 && v.sum() <= 1.01);
        }
    }

    // Scaled vectors whose sum is outside the tolerance always fail.
    #[test]
    fn out_of_tolerance_sums_fail(
        raw in prop::array::uniform4(0.01f64..1.0),
        target in prop_oneof![0.0f64..0.985, 1.015f64..1.6],
    ) {
        let total: f64 = raw.iter().sum();
        let scaled = raw.map(|w| w / total * target);
        prop_assume!(scaled.iter().all(|w| *w <= 1.0));
        let result = SkillWeightVector::from_array(scaled);
        let is_invalid_weights = matches!(result, Err(ConfigurationError::InvalidWeights { .. }));
        prop_assert!(is_invalid_weights);
    }

    // Normalized vectors always construct.
    #[test]
    fn normalized_vectors_construct(raw in prop::array::uniform4(0.01f64..1.0)) {
        let total: f64 = raw.iter().sum();
        let normalized = raw.map(|w| w / total);
        prop_assert!(SkillWeightVector::from_array(normalized).is_ok());
    }
}
