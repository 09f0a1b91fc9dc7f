//! Feature-vector assembly aligned to a model's declared feature names.

use skillfuse_core::constants::SKILL_SIGNAL_FEATURE;
use skillfuse_core::{EvidenceKind, FeatureRecord, Skill};

use crate::signals::skill_signal_mean;

/// Where a feature-vector entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureOrigin {
    Linguistic,
    Behavioral,
    /// The skill-specific `skill_signal_mean` entry.
    Derived,
    /// Present in neither record; filled with 0.0.
    Missing,
}

impl FeatureOrigin {
    /// Evidence kind for an item describing a feature of this origin.
    pub fn evidence_kind(self) -> EvidenceKind {
        match self {
            Self::Linguistic => EvidenceKind::Linguistic,
            Self::Behavioral => EvidenceKind::Behavioral,
            Self::Derived | Self::Missing => EvidenceKind::Contextual,
        }
    }
}

/// A fixed-length vector in the order of the model's feature names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
    origins: Vec<FeatureOrigin>,
}

impl FeatureVector {
    /// Assemble one entry per name. Each name is looked up in the linguistic
    /// record, then the behavioral record; absent names map to 0.0.
    pub fn assemble(
        skill: Skill,
        names: &[String],
        linguistic: Option<&FeatureRecord>,
        behavioral: Option<&FeatureRecord>,
    ) -> Self {
        let mut values = Vec::with_capacity(names.len());
        let mut origins = Vec::with_capacity(names.len());

        for name in names {
            let (value, origin) = if name == SKILL_SIGNAL_FEATURE {
                (skill_signal_mean(skill, linguistic, behavioral), FeatureOrigin::Derived)
            } else if let Some(v) = linguistic.and_then(|r| r.field(name)) {
                (v, FeatureOrigin::Linguistic)
            } else if let Some(v) = behavioral.and_then(|r| r.field(name)) {
                (v, FeatureOrigin::Behavioral)
            } else {
                (0.0, FeatureOrigin::Missing)
            };
            values.push(value);
            origins.push(origin);
        }

        Self {
            names: names.to_vec(),
            values,
            origins,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Origin of a named entry; `Missing` for names outside the vector.
    pub fn origin_of(&self, name: &str) -> FeatureOrigin {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.origins[i])
            .unwrap_or(FeatureOrigin::Missing)
    }
}
