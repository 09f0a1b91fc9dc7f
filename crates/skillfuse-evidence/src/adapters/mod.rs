//! Evidence source adapters.
//!
//! Every adapter splits into a fallible `try_collect` and the infallible
//! [`IEvidenceSource::collect`](skillfuse_core::traits::IEvidenceSource::collect),
//! which logs the error and returns no evidence.

mod behavioral;
mod linguistic;
mod model;

pub use behavioral::BehavioralSignalAdapter;
pub use linguistic::LinguisticSignalAdapter;
pub use model::ModelPredictionAdapter;

use skillfuse_core::errors::{EvidenceError, SkillfuseError, SkillfuseResult};
use skillfuse_core::{EvidenceItem, EvidenceSource, Skill, SubjectId};
use skillfuse_observability::events;

/// Collapse a fallible collection into the degrade-to-empty contract.
pub(crate) fn degrade_on_error(
    source: EvidenceSource,
    subject: &SubjectId,
    skill: Skill,
    result: SkillfuseResult<Vec<EvidenceItem>>,
) -> Vec<EvidenceItem> {
    match result {
        Ok(items) => items,
        Err(e) => {
            events::evidence_degraded(source, subject, skill, &e.to_string());
            Vec::new()
        }
    }
}

/// Wrap a feature-store failure as an evidence error.
pub(crate) fn feature_store_err(e: SkillfuseError) -> SkillfuseError {
    EvidenceError::FeatureStore {
        reason: e.to_string(),
    }
    .into()
}
