use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SubjectId;

/// A flat record of named numeric features derived from a subject's activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub subject_id: SubjectId,
    pub fields: BTreeMap<String, f64>,
    pub recorded_at: DateTime<Utc>,
}

impl FeatureRecord {
    pub fn new(
        subject_id: SubjectId,
        fields: BTreeMap<String, f64>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject_id,
            fields,
            recorded_at,
        }
    }

    /// Value of a named field, if present and finite.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied().filter(|v| v.is_finite())
    }
}
