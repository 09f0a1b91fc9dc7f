use skillfuse_evidence::ConfidenceEstimator;
use test_fixtures::{FailingModel, ScriptedModel};

use skillfuse_core::Skill;

const EPS: f64 = 1e-12;

#[test]
fn solo_components_average_with_solo_weights() {
    let model = ScriptedModel::new(&["a", "b", "c", "d"], 0.1);
    // extremity 0.75, completeness 0.5 + 0.5·2/4 = 0.75
    let c = ConfidenceEstimator::new().estimate(&model, &[1.0, 0.0, 3.0, 0.0], 0.1, 4);
    assert!((c - 0.75).abs() < EPS);
}

#[test]
fn ensemble_component_changes_the_mix() {
    let model = ScriptedModel::new(&["a", "b"], 0.5).with_members(&[0.3, 0.7]);
    // ensemble 1/1.4, extremity 1.0, completeness 0.75
    let expected = (0.5 / 1.4 + 0.3 * 1.0 + 0.2 * 0.75) / 1.0;
    let c = ConfidenceEstimator::new().estimate(&model, &[1.0, 0.0], 0.5, 2);
    assert!((c - expected).abs() < EPS);
}

#[test]
fn agreeing_members_raise_confidence() {
    let spread = ScriptedModel::new(&["a"], 0.5).with_members(&[0.1, 0.9]);
    let tight = ScriptedModel::new(&["a"], 0.5).with_members(&[0.49, 0.51]);
    let est = ConfidenceEstimator::new();
    assert!(est.estimate(&tight, &[1.0], 0.5, 1) > est.estimate(&spread, &[1.0], 0.5, 1));
}

#[test]
fn empty_member_list_means_no_ensemble_component() {
    let with_empty = ScriptedModel::new(&["a"], 0.1).with_members(&[]);
    let plain = ScriptedModel::new(&["a"], 0.1);
    let est = ConfidenceEstimator::new();
    assert_eq!(
        est.estimate(&with_empty, &[1.0], 0.1, 1),
        est.estimate(&plain, &[1.0], 0.1, 1)
    );
}

#[test]
fn result_is_clamped_to_model_bounds() {
    let model = ScriptedModel::new(&["a"], 0.5).with_members(&[0.5, 0.5]);
    assert_eq!(ConfidenceEstimator::new().estimate(&model, &[1.0], 0.5, 1), 0.95);
}

#[test]
fn empty_vector_drops_completeness() {
    let model = ScriptedModel::new(&[], 0.05);
    // extremity alone: 0.5 + 0.5·0.25 = 0.625
    let c = ConfidenceEstimator::new().estimate(&model, &[], 0.05, 0);
    assert!((c - 0.625).abs() < EPS);
}

#[test]
fn length_mismatch_falls_back() {
    let model = ScriptedModel::new(&["a", "b"], 0.9);
    let est = ConfidenceEstimator::new();
    assert!(est.try_estimate(&model, &[1.0], 0.9, 2).is_err());
    assert_eq!(est.estimate(&model, &[1.0], 0.9, 2), 0.85);
}

#[test]
fn non_finite_prediction_falls_back_to_half() {
    let model = FailingModel::new(Skill::Creativity, &["a"]);
    assert_eq!(ConfidenceEstimator::new().estimate(&model, &[1.0], f64::NAN, 1), 0.5);
}

#[test]
fn non_finite_member_output_falls_back() {
    let model = ScriptedModel::new(&["a"], 0.7).with_members(&[0.6, f64::INFINITY]);
    assert_eq!(ConfidenceEstimator::new().estimate(&model, &[1.0], 0.7, 1), 0.7);
}
