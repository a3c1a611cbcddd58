#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Task;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Content-only edit. Follows the read-merge-write shape: absent fields
    /// keep their current value, `Some(None)` clears the description. The
    /// task's position is untouched.
    pub fn update_task(&mut self, request: UpdateTaskRequest) -> Result<Task, StoreError> {
        let UpdateTaskRequest {
            task_id,
            title,
            description,
        } = request;
        if title.is_none() && description.is_none() {
            return Err(StoreError::InvalidInput("no fields to edit"));
        }
        let title = title.map(normalize_title).transpose()?;
        let description = description.map(normalize_description).transpose()?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let Some(current) = task_by_id_tx(&tx, task_id.as_str())? else {
            return Err(StoreError::UnknownTask);
        };

        let new_title = title.unwrap_or(current.title);
        let new_description = description.unwrap_or(current.description);
        tx.execute(
            "UPDATE tasks SET title = ?2, description = ?3, updated_at_ms = ?4 WHERE id = ?1",
            params![task_id.as_str(), new_title, new_description, now_ms],
        )?;
        insert_event_tx(
            &tx,
            now_ms,
            Some(task_id.as_str()),
            "task.updated",
            &json!({ "title": new_title }).to_string(),
        )?;
        let task = task_by_id_tx(&tx, task_id.as_str())?.ok_or(StoreError::UnknownTask)?;
        tx.commit()?;
        Ok(task)
    }
}
