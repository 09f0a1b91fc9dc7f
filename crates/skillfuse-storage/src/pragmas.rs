//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use skillfuse_core::errors::SkillfuseResult;

use crate::to_storage_err;

/// Apply WAL journaling and a busy timeout. In-memory databases ignore the
/// journal mode and stay in `memory`.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> SkillfuseResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> SkillfuseResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
