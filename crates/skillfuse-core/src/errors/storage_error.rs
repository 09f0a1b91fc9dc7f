/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("corrupt feature record for subject {subject_id}: {details}")]
    CorruptRecord { subject_id: String, details: String },
}
