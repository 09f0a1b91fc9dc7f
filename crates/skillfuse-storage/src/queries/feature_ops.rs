//! Point queries and inserts for feature records.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use skillfuse_core::errors::{SkillfuseResult, StorageError};
use skillfuse_core::{FeatureRecord, SubjectId};

use crate::to_storage_err;

/// Which derived-feature table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Linguistic,
    Behavioral,
}

impl FeatureKind {
    fn table(self) -> &'static str {
        match self {
            Self::Linguistic => "linguistic_features",
            Self::Behavioral => "behavioral_features",
        }
    }
}

/// The most recent record for `subject`, if any.
pub fn latest(
    conn: &Connection,
    kind: FeatureKind,
    subject: &SubjectId,
) -> SkillfuseResult<Option<FeatureRecord>> {
    let sql = format!(
        "SELECT recorded_at, fields FROM {} WHERE subject_id = ?1
         ORDER BY recorded_at DESC, id DESC LIMIT 1",
        kind.table()
    );
    let row: Option<(String, String)> = conn
        .query_row(&sql, params![subject.as_str()], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((recorded_at, fields)) = row else {
        return Ok(None);
    };

    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
        .map_err(|e| corrupt(subject, format!("bad timestamp {recorded_at:?}: {e}")))?
        .with_timezone(&Utc);
    let fields: BTreeMap<String, f64> = serde_json::from_str(&fields)
        .map_err(|e| corrupt(subject, format!("bad fields JSON: {e}")))?;

    Ok(Some(FeatureRecord::new(subject.clone(), fields, recorded_at)))
}

/// Append a record. Timestamps are stored as fixed-width RFC 3339 UTC so
/// lexical order matches time order.
pub fn insert(conn: &Connection, kind: FeatureKind, record: &FeatureRecord) -> SkillfuseResult<()> {
    let fields = serde_json::to_string(&record.fields)
        .map_err(|e| corrupt(&record.subject_id, format!("unserializable fields: {e}")))?;
    let sql = format!(
        "INSERT INTO {} (subject_id, recorded_at, fields) VALUES (?1, ?2, ?3)",
        kind.table()
    );
    conn.execute(
        &sql,
        params![
            record.subject_id.as_str(),
            record.recorded_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            fields
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn corrupt(subject: &SubjectId, details: String) -> skillfuse_core::SkillfuseError {
    StorageError::CorruptRecord {
        subject_id: subject.to_string(),
        details,
    }
    .into()
}
