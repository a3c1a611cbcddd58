#![forbid(unsafe_code)]

use super::super::*;
use bk_core::ids::TaskId;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Deletes the task and closes the gap it leaves in its column, as one
    /// transaction.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<(), StoreError> {
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let Some(source) = placement_tx(&tx, COLUMN_SCOPE, id.as_str())? else {
            return Err(StoreError::UnknownTask);
        };
        let count = scope_len_tx(&tx, COLUMN_SCOPE, &source.parent_id)?;

        tx.execute("DELETE FROM tasks WHERE id = ?1", params![id.as_str()])?;
        shift_down_tx(&tx, COLUMN_SCOPE, &source.parent_id, source.position + 1, count)?;

        insert_event_tx(
            &tx,
            now_ms,
            Some(id.as_str()),
            "task.deleted",
            &json!({ "columnId": source.parent_id, "position": source.position }).to_string(),
        )?;
        tx.commit()?;
        Ok(())
    }
}
