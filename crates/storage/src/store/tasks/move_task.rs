#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Task;
use serde_json::json;

impl SqliteStore {
    /// Relocates a task within its column or into another column. Same
    /// transactional contract as [`SqliteStore::move_column`]: for a
    /// cross-column move the one transaction spans both scopes, so either
    /// both the vacated gap closes and the landing gap opens, or neither.
    pub fn move_task(&mut self, request: MoveTaskRequest) -> Result<Task, StoreError> {
        let MoveTaskRequest {
            task_id,
            destination_column_id,
            destination_position,
        } = request;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let Some(source) = placement_tx(&tx, COLUMN_SCOPE, task_id.as_str())? else {
            return Err(StoreError::UnknownTask);
        };
        resolve_destination_column_tx(&tx, destination_column_id.as_str())?;

        let after = move_item_tx(
            &tx,
            COLUMN_SCOPE,
            task_id.as_str(),
            &source,
            destination_column_id.as_str(),
            destination_position,
            now_ms,
        )?;
        if after != source {
            insert_event_tx(
                &tx,
                now_ms,
                Some(task_id.as_str()),
                "task.moved",
                &json!({
                    "from": { "columnId": source.parent_id, "position": source.position },
                    "to": { "columnId": after.parent_id, "position": after.position },
                })
                .to_string(),
            )?;
        }

        let task = task_by_id_tx(&tx, task_id.as_str())?.ok_or(StoreError::UnknownTask)?;
        tx.commit()?;
        Ok(task)
    }
}
