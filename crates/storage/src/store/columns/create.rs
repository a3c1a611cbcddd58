#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Column;
use rusqlite::params;
use serde_json::json;

impl SqliteStore {
    /// Appends a column at the tail of its board: position = count + 1, so
    /// no existing row moves.
    pub fn create_column(&mut self, request: CreateColumnRequest) -> Result<Column, StoreError> {
        let CreateColumnRequest { board_id, title } = request;
        let title = normalize_title(title)?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        if !board_exists_tx(&tx, board_id.as_str())? {
            return Err(StoreError::UnknownBoard);
        }

        let position = scope_len_tx(&tx, BOARD_SCOPE, board_id.as_str())? + 1;
        let id = new_id();
        tx.execute(
            r#"
            INSERT INTO columns(id, board_id, position, title, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![id, board_id.as_str(), position, title, now_ms, now_ms],
        )?;
        insert_event_tx(
            &tx,
            now_ms,
            Some(&id),
            "column.created",
            &json!({ "boardId": board_id.as_str(), "position": position }).to_string(),
        )?;
        tx.commit()?;

        Ok(Column {
            id,
            board_id: board_id.into_string(),
            position,
            title,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }
}
