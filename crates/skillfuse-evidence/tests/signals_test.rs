//! Table-driven checks of the (skill, source) signal rules.

use chrono::Utc;
use skillfuse_core::constants::{
    BEHAVIORAL_CONFIDENCE, BEHAVIORAL_RELEVANCE, LINGUISTIC_CONFIDENCE, LINGUISTIC_RELEVANCE,
};
use skillfuse_core::{EvidenceKind, EvidenceSource, Skill};
use skillfuse_evidence::signals::{rules, signal_items, skill_signal_mean};
use test_fixtures::record;

struct Case {
    skill: Skill,
    source: EvidenceSource,
    fields: &'static [(&'static str, f64)],
    expected_scores: &'static [f64],
}

const CASES: &[Case] = &[
    Case {
        skill: Skill::Communication,
        source: EvidenceSource::LinguisticSignal,
        fields: &[("clarity", 0.6), ("vocabulary_richness", 0.4)],
        expected_scores: &[0.6, 0.5],
    },
    Case {
        skill: Skill::Collaboration,
        source: EvidenceSource::BehavioralSignal,
        fields: &[("peer_interactions", 30.0), ("turn_taking_balance", 0.25)],
        expected_scores: &[1.0, 0.25],
    },
    Case {
        skill: Skill::CriticalThinking,
        source: EvidenceSource::LinguisticSignal,
        fields: &[("question_rate", 0.15)],
        expected_scores: &[0.5],
    },
    Case {
        skill: Skill::Creativity,
        source: EvidenceSource::BehavioralSignal,
        fields: &[("distinct_approaches", -2.0)],
        expected_scores: &[0.0],
    },
    Case {
        skill: Skill::ProblemSolving,
        source: EvidenceSource::BehavioralSignal,
        fields: &[("debug_iterations", 7.5), ("task_completion_rate", 0.9)],
        expected_scores: &[0.9, 0.5],
    },
    Case {
        skill: Skill::ProblemSolving,
        source: EvidenceSource::LinguisticSignal,
        fields: &[("unrelated_field", 3.0)],
        expected_scores: &[],
    },
];

#[test]
fn rules_normalize_and_clamp() {
    for case in CASES {
        let rec = record("s-1", case.fields, Utc::now());
        let items = signal_items(case.skill, case.source, &rec);
        let scores: Vec<f64> = items.iter().map(|i| i.score).collect();
        assert_eq!(
            scores.len(),
            case.expected_scores.len(),
            "{} / {}",
            case.skill,
            case.source.as_str()
        );
        for (got, want) in scores.iter().zip(case.expected_scores) {
            assert!((got - want).abs() < 1e-9, "{}: {got} != {want}", case.skill);
        }
    }
}

#[test]
fn signal_items_carry_source_constants() {
    let ling = record("s-1", &[("clarity", 1.0)], Utc::now());
    let items = signal_items(Skill::Communication, EvidenceSource::LinguisticSignal, &ling);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kind, EvidenceKind::Linguistic);
    assert_eq!(items[0].relevance, LINGUISTIC_RELEVANCE);
    assert_eq!(items[0].confidence, LINGUISTIC_CONFIDENCE);
    assert_eq!(items[0].weight, None);

    let beh = record("s-1", &[("response_rate", 0.5)], Utc::now());
    let items = signal_items(Skill::Communication, EvidenceSource::BehavioralSignal, &beh);
    assert_eq!(items[0].kind, EvidenceKind::Behavioral);
    assert_eq!(items[0].relevance, BEHAVIORAL_RELEVANCE);
    assert_eq!(items[0].confidence, BEHAVIORAL_CONFIDENCE);
}

#[test]
fn non_finite_fields_are_skipped() {
    let rec = record("s-1", &[("clarity", f64::NAN), ("vocabulary_richness", 0.8)], Utc::now());
    let items = signal_items(Skill::Communication, EvidenceSource::LinguisticSignal, &rec);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].score, 1.0);
}

#[test]
fn skill_signal_mean_spans_both_records() {
    let ling = record("s-1", &[("clarity", 0.4)], Utc::now());
    let beh = record("s-1", &[("response_rate", 0.8)], Utc::now());
    let mean = skill_signal_mean(Skill::Communication, Some(&ling), Some(&beh));
    assert!((mean - 0.6).abs() < 1e-12);

    assert_eq!(skill_signal_mean(Skill::Communication, None, None), 0.0);
    let unrelated = record("s-1", &[("other", 1.0)], Utc::now());
    assert_eq!(skill_signal_mean(Skill::Creativity, Some(&unrelated), None), 0.0);
}

#[test]
fn skills_emphasize_different_fields() {
    let comm = rules(Skill::Communication, EvidenceSource::LinguisticSignal);
    let crit = rules(Skill::CriticalThinking, EvidenceSource::LinguisticSignal);
    assert!(comm.iter().all(|a| crit.iter().all(|b| a.field != b.field)));
}
