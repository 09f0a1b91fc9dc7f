//! Static `(skill, source) → rules` table for signal-derived evidence.
//!
//! Each rule reads one named field of a feature record and normalizes it as
//! `clamp(value / saturation, 0, 1)`. A pair carries at most two rules.
//! Adding a skill means adding rows here.

use skillfuse_core::constants::{
    BEHAVIORAL_CONFIDENCE, BEHAVIORAL_RELEVANCE, LINGUISTIC_CONFIDENCE, LINGUISTIC_RELEVANCE,
};
use skillfuse_core::{EvidenceItem, EvidenceKind, EvidenceSource, FeatureRecord, Skill};

/// One field-to-evidence mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRule {
    pub field: &'static str,
    /// Raw value at which the normalized score reaches 1.0.
    pub saturation: f64,
    pub text: &'static str,
}

impl SignalRule {
    const fn new(field: &'static str, saturation: f64, text: &'static str) -> Self {
        Self {
            field,
            saturation,
            text,
        }
    }

    /// Normalized score, or `None` when the record lacks the field.
    pub fn evaluate(&self, record: &FeatureRecord) -> Option<f64> {
        let raw = record.field(self.field)?;
        Some((raw / self.saturation).clamp(0.0, 1.0))
    }
}

type Rules = &'static [SignalRule];

// (skill, linguistic rules, behavioral rules)
const SIGNAL_TABLE: [(Skill, Rules, Rules); 5] = [
    (
        Skill::Communication,
        &[
            SignalRule::new("clarity", 1.0, "Explanations are clear and well structured"),
            SignalRule::new("vocabulary_richness", 0.8, "Uses varied, precise vocabulary"),
        ],
        &[SignalRule::new("response_rate", 1.0, "Responds consistently in discussion")],
    ),
    (
        Skill::Collaboration,
        &[
            SignalRule::new("inclusive_language_rate", 0.3, "Frames work in inclusive, team terms"),
            SignalRule::new("acknowledgement_rate", 0.25, "Acknowledges peers' contributions"),
        ],
        &[
            SignalRule::new("peer_interactions", 20.0, "Interacts frequently with peers"),
            SignalRule::new("turn_taking_balance", 1.0, "Shares the floor in group work"),
        ],
    ),
    (
        Skill::CriticalThinking,
        &[
            SignalRule::new("reasoning_marker_rate", 0.2, "Justifies claims with explicit reasoning"),
            SignalRule::new("question_rate", 0.3, "Asks probing questions"),
        ],
        &[SignalRule::new("revision_count", 10.0, "Revises work in response to feedback")],
    ),
    (
        Skill::Creativity,
        &[
            SignalRule::new("idea_novelty", 1.0, "Proposes novel ideas"),
            SignalRule::new("hypothetical_rate", 0.15, "Explores hypotheticals and alternatives"),
        ],
        &[SignalRule::new("distinct_approaches", 5.0, "Tries several distinct approaches")],
    ),
    (
        Skill::ProblemSolving,
        &[SignalRule::new("plan_statement_rate", 0.2, "Articulates plans and next steps")],
        &[
            SignalRule::new("task_completion_rate", 1.0, "Completes assigned tasks"),
            SignalRule::new("debug_iterations", 15.0, "Iterates systematically toward a solution"),
        ],
    ),
];

/// Rules for a `(skill, source)` pair. Model predictions have none.
pub fn rules(skill: Skill, source: EvidenceSource) -> &'static [SignalRule] {
    let Some((_, linguistic, behavioral)) = SIGNAL_TABLE.iter().find(|(s, _, _)| *s == skill) else {
        return &[];
    };
    match source {
        EvidenceSource::LinguisticSignal => linguistic,
        EvidenceSource::BehavioralSignal => behavioral,
        EvidenceSource::ModelPrediction => &[],
    }
}

/// Evidence items for every rule of the pair whose field is present.
pub fn signal_items(skill: Skill, source: EvidenceSource, record: &FeatureRecord) -> Vec<EvidenceItem> {
    let (kind, relevance, confidence) = match source {
        EvidenceSource::LinguisticSignal => {
            (EvidenceKind::Linguistic, LINGUISTIC_RELEVANCE, LINGUISTIC_CONFIDENCE)
        }
        EvidenceSource::BehavioralSignal => {
            (EvidenceKind::Behavioral, BEHAVIORAL_RELEVANCE, BEHAVIORAL_CONFIDENCE)
        }
        EvidenceSource::ModelPrediction => return Vec::new(),
    };

    rules(skill, source)
        .iter()
        .filter_map(|rule| {
            let score = rule.evaluate(record)?;
            Some(EvidenceItem::new(source, kind, rule.text, score, confidence, relevance))
        })
        .collect()
}

/// Mean normalized score over every rule for `skill` that fires on either
/// record. 0.0 when nothing fires.
pub fn skill_signal_mean(
    skill: Skill,
    linguistic: Option<&FeatureRecord>,
    behavioral: Option<&FeatureRecord>,
) -> f64 {
    let pairs = [
        (EvidenceSource::LinguisticSignal, linguistic),
        (EvidenceSource::BehavioralSignal, behavioral),
    ];
    let scores: Vec<f64> = pairs
        .into_iter()
        .filter_map(|(source, record)| record.map(|r| (source, r)))
        .flat_map(|(source, record)| rules(skill, source).iter().filter_map(|rule| rule.evaluate(record)))
        .collect();

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
