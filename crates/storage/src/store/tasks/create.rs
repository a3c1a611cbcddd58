#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Task;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Appends a task at the tail of its column.
    pub fn create_task(&mut self, request: CreateTaskRequest) -> Result<Task, StoreError> {
        let CreateTaskRequest {
            column_id,
            title,
            description,
        } = request;
        let title = normalize_title(title)?;
        let description = normalize_description(description)?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        if column_by_id_tx(&tx, column_id.as_str())?.is_none() {
            return Err(StoreError::UnknownColumn);
        }

        let position = scope_len_tx(&tx, COLUMN_SCOPE, column_id.as_str())? + 1;
        let id = new_id();
        tx.execute(
            r#"
            INSERT INTO tasks(id, column_id, position, title, description, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                id,
                column_id.as_str(),
                position,
                title,
                description,
                now_ms,
                now_ms
            ],
        )?;
        insert_event_tx(
            &tx,
            now_ms,
            Some(&id),
            "task.created",
            &json!({ "columnId": column_id.as_str(), "position": position }).to_string(),
        )?;
        tx.commit()?;

        Ok(Task {
            id,
            column_id: column_id.into_string(),
            position,
            title,
            description,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }
}
