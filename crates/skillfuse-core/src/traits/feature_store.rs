use crate::errors::SkillfuseResult;
use crate::models::{FeatureRecord, SubjectId};

/// Read-only access to the derived feature records produced by ingestion.
///
/// Both reads are "most recent record for this subject" point queries.
pub trait IFeatureStore: Send + Sync {
    fn latest_linguistic_features(&self, subject: &SubjectId)
        -> SkillfuseResult<Option<FeatureRecord>>;

    fn latest_behavioral_features(&self, subject: &SubjectId)
        -> SkillfuseResult<Option<FeatureRecord>>;
}
