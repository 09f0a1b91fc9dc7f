//! FusionEngine: weighted averaging of evidence.

use skillfuse_core::constants::MAX_TOP_EVIDENCE;
use skillfuse_core::models::clamp_unit;
use skillfuse_core::{EvidenceItem, FusedScore, Skill};
use tracing::debug;

use crate::ranking::{effective_weight, rank_evidence};

/// Fuses evidence items into a [`FusedScore`].
///
/// With `ew = weight × relevance × confidence` per item:
/// - `score = Σ(score·ew) / Σew`
/// - `confidence = Σ(confidence·ew) / Σew`
///
/// and `Σew == 0` yields the neutral result `(0.5, 0.3, [])`.
#[derive(Debug, Clone)]
pub struct FusionEngine {
    max_evidence: usize,
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self {
            max_evidence: MAX_TOP_EVIDENCE,
        }
    }
}

impl FusionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine keeping at most `max_evidence` ranked items (capped at five).
    pub fn with_max_evidence(max_evidence: usize) -> Self {
        Self {
            max_evidence: max_evidence.min(MAX_TOP_EVIDENCE),
        }
    }

    pub fn fuse(&self, items: &[EvidenceItem], skill: Skill) -> FusedScore {
        let weighted: Vec<(EvidenceItem, f64)> = items
            .iter()
            .map(|item| {
                let normalized = normalize(item);
                let ew = effective_weight(&normalized);
                (normalized, ew)
            })
            .collect();

        let total: f64 = weighted.iter().map(|(_, ew)| ew).sum();
        if total <= 0.0 {
            debug!(skill = %skill, items = items.len(), "no effective evidence weight; neutral result");
            return FusedScore::neutral();
        }

        let score = weighted.iter().map(|(i, ew)| i.score * ew).sum::<f64>() / total;
        let confidence = weighted.iter().map(|(i, ew)| i.confidence * ew).sum::<f64>() / total;

        FusedScore {
            score: clamp_unit(score),
            confidence: clamp_unit(confidence),
            evidence: rank_evidence(&weighted, self.max_evidence),
        }
    }
}

/// Copy of `item` with every numeric field clamped to [0.0, 1.0].
fn normalize(item: &EvidenceItem) -> EvidenceItem {
    EvidenceItem {
        score: clamp_unit(item.score),
        confidence: clamp_unit(item.confidence),
        relevance: clamp_unit(item.relevance),
        weight: item.weight.map(clamp_unit),
        ..item.clone()
    }
}
