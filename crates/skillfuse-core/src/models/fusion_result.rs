use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{NEUTRAL_CONFIDENCE, NEUTRAL_SCORE};
use crate::models::{EvidenceItem, Skill, SubjectId};

/// Output of the fusion algorithm for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedScore {
    pub score: f64,
    pub confidence: f64,
    /// Top evidence, ranked, at most five items.
    pub evidence: Vec<EvidenceItem>,
}

impl FusedScore {
    /// Result reported when no evidence carries weight.
    pub fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            confidence: NEUTRAL_CONFIDENCE,
            evidence: Vec::new(),
        }
    }
}

/// A fused assessment of one subject on one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub subject_id: SubjectId,
    pub skill: Skill,
    pub score: f64,
    pub confidence: f64,
    pub evidence: Vec<EvidenceItem>,
    pub computed_at: DateTime<Utc>,
}

impl FusionResult {
    pub fn from_fused(subject_id: SubjectId, skill: Skill, fused: FusedScore) -> Self {
        Self {
            subject_id,
            skill,
            score: fused.score,
            confidence: fused.confidence,
            evidence: fused.evidence,
            computed_at: Utc::now(),
        }
    }
}
