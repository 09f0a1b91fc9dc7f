//! Feature tables. One row per derived record; `fields` holds a JSON object
//! of named numeric features.

use rusqlite::Connection;

use skillfuse_core::errors::SkillfuseResult;

use crate::to_storage_err;

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS linguistic_features (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        subject_id  TEXT NOT NULL,
        recorded_at TEXT NOT NULL,
        fields      TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_linguistic_subject_time
        ON linguistic_features (subject_id, recorded_at DESC);

    CREATE TABLE IF NOT EXISTS behavioral_features (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        subject_id  TEXT NOT NULL,
        recorded_at TEXT NOT NULL,
        fields      TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_behavioral_subject_time
        ON behavioral_features (subject_id, recorded_at DESC);
";

/// Create the feature tables if they do not exist yet.
pub fn create_tables(conn: &Connection) -> SkillfuseResult<()> {
    conn.execute_batch(CREATE_TABLES)
        .map_err(|e| to_storage_err(e.to_string()))
}
