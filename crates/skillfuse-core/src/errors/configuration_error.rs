use crate::models::Skill;

/// Operational misconfiguration. Always surfaced, never silently recovered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("no weight configuration for skill {0}")]
    UnknownSkill(Skill),
}
