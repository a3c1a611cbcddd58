#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Column;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Content-only update; the column's position is untouched.
    pub fn rename_column(&mut self, request: RenameColumnRequest) -> Result<Column, StoreError> {
        let RenameColumnRequest { column_id, title } = request;
        let title = normalize_title(title)?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let updated = tx.execute(
            "UPDATE columns SET title = ?2, updated_at_ms = ?3 WHERE id = ?1",
            params![column_id.as_str(), title, now_ms],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownColumn);
        }
        insert_event_tx(
            &tx,
            now_ms,
            Some(column_id.as_str()),
            "column.renamed",
            &json!({ "title": title }).to_string(),
        )?;
        let column =
            column_by_id_tx(&tx, column_id.as_str())?.ok_or(StoreError::UnknownColumn)?;
        tx.commit()?;
        Ok(column)
    }
}
