use crate::models::Skill;

/// Failures while turning external data into evidence.
/// Recovered at the adapter boundary as "no evidence from this source".
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("feature store read failed: {reason}")]
    FeatureStore { reason: String },

    #[error("model invocation failed for {skill}: {reason}")]
    ModelInvocation { skill: Skill, reason: String },

    #[error("invalid model output: {reason}")]
    InvalidOutput { reason: String },

    #[error("feature vector length mismatch: expected {expected}, got {actual}")]
    FeatureLengthMismatch { expected: usize, actual: usize },

    #[error("invalid model for {skill}: {reason}")]
    InvalidModel { skill: Skill, reason: String },
}
