use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use skillfuse_core::{EvidenceItem, EvidenceKind, EvidenceSource, FeatureRecord, SubjectId};

/// A feature record with the given fields.
pub fn record(subject: &str, fields: &[(&str, f64)], recorded_at: DateTime<Utc>) -> FeatureRecord {
    let fields: BTreeMap<String, f64> = fields
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    FeatureRecord::new(SubjectId::new(subject), fields, recorded_at)
}

/// An evidence item with an explicit weight.
pub fn evidence(
    source: EvidenceSource,
    score: f64,
    confidence: f64,
    relevance: f64,
    weight: f64,
) -> EvidenceItem {
    let kind = match source {
        EvidenceSource::ModelPrediction => EvidenceKind::Contextual,
        EvidenceSource::LinguisticSignal => EvidenceKind::Linguistic,
        EvidenceSource::BehavioralSignal => EvidenceKind::Behavioral,
    };
    EvidenceItem::new(source, kind, format!("{} observation", source.as_str()), score, confidence, relevance)
        .with_weight(weight)
}
