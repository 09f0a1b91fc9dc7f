use std::sync::Arc;

use skillfuse_core::errors::SkillfuseResult;
use skillfuse_core::traits::{IEvidenceSource, IFeatureStore};
use skillfuse_core::{EvidenceItem, EvidenceSource, Skill, SubjectId};
use tracing::debug;

use super::{degrade_on_error, feature_store_err};
use crate::signals::signal_items;

/// Evidence from the subject's most recent linguistic feature record.
pub struct LinguisticSignalAdapter {
    store: Arc<dyn IFeatureStore>,
}

impl LinguisticSignalAdapter {
    pub fn new(store: Arc<dyn IFeatureStore>) -> Self {
        Self { store }
    }

    pub fn try_collect(&self, subject: &SubjectId, skill: Skill) -> SkillfuseResult<Vec<EvidenceItem>> {
        let Some(record) = self
            .store
            .latest_linguistic_features(subject)
            .map_err(feature_store_err)?
        else {
            debug!(subject = %subject, "no linguistic record");
            return Ok(Vec::new());
        };
        Ok(signal_items(skill, EvidenceSource::LinguisticSignal, &record))
    }
}

impl IEvidenceSource for LinguisticSignalAdapter {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::LinguisticSignal
    }

    fn collect(&self, subject: &SubjectId, skill: Skill) -> Vec<EvidenceItem> {
        degrade_on_error(self.source(), subject, skill, self.try_collect(subject, skill))
    }
}
