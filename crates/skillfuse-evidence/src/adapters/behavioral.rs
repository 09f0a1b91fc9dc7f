use std::sync::Arc;

use skillfuse_core::errors::SkillfuseResult;
use skillfuse_core::traits::{IEvidenceSource, IFeatureStore};
use skillfuse_core::{EvidenceItem, EvidenceSource, Skill, SubjectId};
use tracing::debug;

use super::{degrade_on_error, feature_store_err};
use crate::signals::signal_items;

/// Evidence from the subject's most recent behavioral feature record.
pub struct BehavioralSignalAdapter {
    store: Arc<dyn IFeatureStore>,
}

impl BehavioralSignalAdapter {
    pub fn new(store: Arc<dyn IFeatureStore>) -> Self {
        Self { store }
    }

    pub fn try_collect(&self, subject: &SubjectId, skill: Skill) -> SkillfuseResult<Vec<EvidenceItem>> {
        let Some(record) = self
            .store
            .latest_behavioral_features(subject)
            .map_err(feature_store_err)?
        else {
            debug!(subject = %subject, "no behavioral record");
            return Ok(Vec::new());
        };
        Ok(signal_items(skill, EvidenceSource::BehavioralSignal, &record))
    }
}

impl IEvidenceSource for BehavioralSignalAdapter {
    fn source(&self) -> EvidenceSource {
        EvidenceSource::BehavioralSignal
    }

    fn collect(&self, subject: &SubjectId, skill: Skill) -> Vec<EvidenceItem> {
        degrade_on_error(self.source(), subject, skill, self.try_collect(subject, skill))
    }
}
