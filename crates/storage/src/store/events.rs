#![forbid(unsafe_code)]

use super::{SqliteStore, StoreError};
use rusqlite::{Transaction, params};
use serde::Serialize;

/// Append-only audit record, written in the same transaction as the
/// mutation it describes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub seq: i64,
    pub ts_ms: i64,
    pub item_id: Option<String>,
    pub event_type: String,
    pub payload_json: String,
}

impl EventRow {
    pub fn event_id(&self) -> String {
        format!("evt_{:016}", self.seq)
    }
}

impl SqliteStore {
    pub fn list_events(&self, since_seq: i64, limit: usize) -> Result<Vec<EventRow>, StoreError> {
        let mut stmt = self.conn().prepare(
            r#"
            SELECT seq, ts_ms, item_id, type, payload_json
            FROM events
            WHERE seq > ?1
            ORDER BY seq ASC
            LIMIT ?2
            "#,
        )?;
        let rows = stmt.query_map(params![since_seq, limit as i64], |row| {
            Ok(EventRow {
                seq: row.get(0)?,
                ts_ms: row.get(1)?,
                item_id: row.get(2)?,
                event_type: row.get(3)?,
                payload_json: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

pub(crate) fn insert_event_tx(
    tx: &Transaction<'_>,
    ts_ms: i64,
    item_id: Option<&str>,
    event_type: &str,
    payload_json: &str,
) -> Result<(), StoreError> {
    tx.execute(
        r#"
        INSERT INTO events(ts_ms, item_id, type, payload_json)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![ts_ms, item_id, event_type, payload_json],
    )?;
    Ok(())
}
