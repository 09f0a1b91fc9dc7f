mod configuration_error;
mod evidence_error;
mod persistence_error;
mod storage_error;

pub use configuration_error::ConfigurationError;
pub use evidence_error::EvidenceError;
pub use persistence_error::PersistenceError;
pub use storage_error::StorageError;

/// Top-level error for every SkillFuse operation.
///
/// Only `Configuration` is ever surfaced to callers of the scoring service;
/// the other variants are recovered at component boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SkillfuseError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Evidence(#[from] EvidenceError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SkillfuseError {
    /// Whether this error indicates operational misconfiguration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

pub type SkillfuseResult<T> = Result<T, SkillfuseError>;
