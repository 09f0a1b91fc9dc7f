use proptest::prelude::*;
use skillfuse_core::{EvidenceItem, EvidenceSource, Skill};
use skillfuse_fusion::FusionEngine;
use test_fixtures::evidence;

fn source() -> impl Strategy<Value = EvidenceSource> {
    prop_oneof![
        Just(EvidenceSource::ModelPrediction),
        Just(EvidenceSource::LinguisticSignal),
        Just(EvidenceSource::BehavioralSignal),
    ]
}

fn item() -> impl Strategy<Value = EvidenceItem> {
    (source(), 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(s, score, conf, rel, w)| evidence(s, score, conf, rel, w))
}

fn skill() -> impl Strategy<Value = Skill> {
    prop::sample::select(Skill::ALL.to_vec())
}

proptest! {
    #[test]
    fn results_stay_in_bounds(items in prop::collection::vec(item(), 0..20), skill in skill()) {
        let fused = FusionEngine::new().fuse(&items, skill);
        prop_assert!((0.0..=1.0).contains(&fused.score));
        prop_assert!((0.0..=1.0).contains(&fused.confidence));
        prop_assert!(fused.evidence.len() <= 5);
    }

    #[test]
    fn fusing_twice_is_bit_identical(items in prop::collection::vec(item(), 0..20), skill in skill()) {
        let engine = FusionEngine::new();
        let a = engine.fuse(&items, skill);
        let b = engine.fuse(&items, skill);
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
        prop_assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
        prop_assert_eq!(a.evidence, b.evidence);
    }

    #[test]
    fn raising_confidence_moves_score_toward_item(
        target_score in 0.0f64..=1.0,
        low_conf in 0.05f64..0.5,
        bump in 0.1f64..0.5,
        rel in 0.2f64..=1.0,
        w in 0.2f64..=1.0,
        others in prop::collection::vec(item(), 1..6),
    ) {
        let other_ew: f64 = others
            .iter()
            .map(|i| i.weight.unwrap_or(0.0) * i.relevance * i.confidence)
            .sum();
        prop_assume!(other_ew > 1e-3);
        let other_mean = others
            .iter()
            .map(|i| i.score * i.weight.unwrap_or(0.0) * i.relevance * i.confidence)
            .sum::<f64>() / other_ew;
        prop_assume!((other_mean - target_score).abs() > 1e-3);

        let engine = FusionEngine::new();
        let with_conf = |conf: f64| {
            let mut items = others.clone();
            items.push(evidence(EvidenceSource::ModelPrediction, target_score, conf, rel, w));
            engine.fuse(&items, Skill::CriticalThinking).score
        };

        let before = (with_conf(low_conf) - target_score).abs();
        let after = (with_conf(low_conf + bump) - target_score).abs();
        prop_assert!(after < before, "before {before}, after {after}");
    }

    #[test]
    fn all_unweighted_is_neutral(items in prop::collection::vec(item(), 0..10), skill in skill()) {
        let stripped: Vec<EvidenceItem> = items
            .into_iter()
            .map(|i| EvidenceItem { weight: None, ..i })
            .collect();
        let fused = FusionEngine::new().fuse(&stripped, skill);
        prop_assert_eq!(fused.score, 0.5);
        prop_assert_eq!(fused.confidence, 0.3);
        prop_assert!(fused.evidence.is_empty());
    }
}
