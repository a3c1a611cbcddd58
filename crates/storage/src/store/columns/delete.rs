#![forbid(unsafe_code)]

use super::super::*;
use bk_core::ids::ColumnId;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Deletes the column and its tasks, then closes the gap it leaves in
    /// the board scope. The delete and the shift commit together or not at
    /// all.
    pub fn delete_column(&mut self, id: &ColumnId) -> Result<(), StoreError> {
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let Some(source) = placement_tx(&tx, BOARD_SCOPE, id.as_str())? else {
            return Err(StoreError::UnknownColumn);
        };
        let count = scope_len_tx(&tx, BOARD_SCOPE, &source.parent_id)?;

        tx.execute("DELETE FROM tasks WHERE column_id = ?1", params![id.as_str()])?;
        tx.execute("DELETE FROM columns WHERE id = ?1", params![id.as_str()])?;
        shift_down_tx(&tx, BOARD_SCOPE, &source.parent_id, source.position + 1, count)?;

        insert_event_tx(
            &tx,
            now_ms,
            Some(id.as_str()),
            "column.deleted",
            &json!({ "boardId": source.parent_id, "position": source.position }).to_string(),
        )?;
        tx.commit()?;
        Ok(())
    }
}
