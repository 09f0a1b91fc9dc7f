//! # skillfuse-storage
//!
//! SQLite implementation of [`IFeatureStore`](skillfuse_core::traits::IFeatureStore).
//! Ingestion writes derived feature records; the scoring engine only ever
//! reads the single most recent record per subject and kind.

pub mod pragmas;
pub mod queries;
pub mod schema;
pub mod store;

pub use queries::FeatureKind;
pub use store::SqliteFeatureStore;

use skillfuse_core::errors::{SkillfuseError, StorageError};

/// Convert a SQLite failure message into a storage error.
pub(crate) fn to_storage_err(message: String) -> SkillfuseError {
    SkillfuseError::Storage(StorageError::SqliteError { message })
}
