use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use skillfuse_core::errors::{EvidenceError, SkillfuseResult};
use skillfuse_core::traits::IFeatureStore;
use skillfuse_core::{FeatureRecord, SubjectId};

/// In-memory feature store keeping only the latest record per subject and kind.
#[derive(Default)]
pub struct MemoryFeatureStore {
    linguistic: Mutex<HashMap<SubjectId, FeatureRecord>>,
    behavioral: Mutex<HashMap<SubjectId, FeatureRecord>>,
}

impl MemoryFeatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_linguistic(self, record: FeatureRecord) -> Self {
        self.put_linguistic(record);
        self
    }

    pub fn with_behavioral(self, record: FeatureRecord) -> Self {
        self.put_behavioral(record);
        self
    }

    /// Keep `record` if it is newer than what is stored.
    pub fn put_linguistic(&self, record: FeatureRecord) {
        put_latest(&self.linguistic, record);
    }

    pub fn put_behavioral(&self, record: FeatureRecord) {
        put_latest(&self.behavioral, record);
    }
}

fn put_latest(map: &Mutex<HashMap<SubjectId, FeatureRecord>>, record: FeatureRecord) {
    let mut map = map.lock().unwrap_or_else(PoisonError::into_inner);
    let newer = map
        .get(&record.subject_id)
        .map_or(true, |existing| existing.recorded_at <= record.recorded_at);
    if newer {
        map.insert(record.subject_id.clone(), record);
    }
}

impl IFeatureStore for MemoryFeatureStore {
    fn latest_linguistic_features(
        &self,
        subject: &SubjectId,
    ) -> SkillfuseResult<Option<FeatureRecord>> {
        let map = self.linguistic.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(subject).cloned())
    }

    fn latest_behavioral_features(
        &self,
        subject: &SubjectId,
    ) -> SkillfuseResult<Option<FeatureRecord>> {
        let map = self.behavioral.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(subject).cloned())
    }
}

/// A feature store whose every read fails.
#[derive(Debug, Default)]
pub struct FailingFeatureStore;

impl IFeatureStore for FailingFeatureStore {
    fn latest_linguistic_features(&self, _: &SubjectId) -> SkillfuseResult<Option<FeatureRecord>> {
        Err(EvidenceError::FeatureStore {
            reason: "linguistic store offline".to_string(),
        }
        .into())
    }

    fn latest_behavioral_features(&self, _: &SubjectId) -> SkillfuseResult<Option<FeatureRecord>> {
        Err(EvidenceError::FeatureStore {
            reason: "behavioral store offline".to_string(),
        }
        .into())
    }
}
