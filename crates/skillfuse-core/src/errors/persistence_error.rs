/// Weight configuration load/save failures.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("config document not found: {path}")]
    NotFound { path: String },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("failed to serialize config: {reason}")]
    Serialize { reason: String },
}
