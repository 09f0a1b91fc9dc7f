//! SqliteFeatureStore: a single connection behind a mutex.
//!
//! Reads are short single-row lookups, so one connection is enough; callers
//! that need parallelism run adapters on blocking threads and queue here.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rusqlite::Connection;
use tracing::debug;

use skillfuse_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use skillfuse_core::errors::SkillfuseResult;
use skillfuse_core::traits::IFeatureStore;
use skillfuse_core::{FeatureRecord, SubjectId};

use crate::pragmas::apply_pragmas;
use crate::queries::feature_ops::{self, FeatureKind};
use crate::schema::create_tables;
use crate::to_storage_err;

pub struct SqliteFeatureStore {
    conn: Mutex<Connection>,
}

impl SqliteFeatureStore {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SkillfuseResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        create_tables(&conn)?;
        debug!(path = %path.display(), "feature store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> SkillfuseResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Append a derived record.
    pub fn insert_record(&self, kind: FeatureKind, record: &FeatureRecord) -> SkillfuseResult<()> {
        self.with_conn(|conn| feature_ops::insert(conn, kind, record))
    }

    /// Execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> SkillfuseResult<T>
    where
        F: FnOnce(&Connection) -> SkillfuseResult<T>,
    {
        let guard = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

impl IFeatureStore for SqliteFeatureStore {
    fn latest_linguistic_features(
        &self,
        subject: &SubjectId,
    ) -> SkillfuseResult<Option<FeatureRecord>> {
        self.with_conn(|conn| feature_ops::latest(conn, FeatureKind::Linguistic, subject))
    }

    fn latest_behavioral_features(
        &self,
        subject: &SubjectId,
    ) -> SkillfuseResult<Option<FeatureRecord>> {
        self.with_conn(|conn| feature_ops::latest(conn, FeatureKind::Behavioral, subject))
    }
}
