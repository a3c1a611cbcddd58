#![forbid(unsafe_code)]

use super::*;
use bk_core::ids::{BoardId, WorkspaceId};
use bk_core::model::Board;
use rusqlite::{OptionalExtension, params};
use serde_json::json;

impl SqliteStore {
    pub fn create_board(&mut self, request: CreateBoardRequest) -> Result<Board, StoreError> {
        let CreateBoardRequest { workspace_id, name } = request;
        let name = normalize_title(name)?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        if !workspace_exists_tx(&tx, workspace_id.as_str())? {
            return Err(StoreError::UnknownWorkspace);
        }

        let id = new_id();
        tx.execute(
            r#"
            INSERT INTO boards(id, workspace, name, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![id, workspace_id.as_str(), name, now_ms, now_ms],
        )?;
        insert_event_tx(
            &tx,
            now_ms,
            Some(&id),
            "board.created",
            &json!({ "workspaceId": workspace_id.as_str(), "name": name.as_str() }).to_string(),
        )?;
        tx.commit()?;

        Ok(Board {
            id,
            workspace_id: workspace_id.into_string(),
            name,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        })
    }

    pub fn get_board(&self, id: &BoardId) -> Result<Option<Board>, StoreError> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?1");
        Ok(self
            .conn()
            .query_row(&sql, params![id.as_str()], board_from_row)
            .optional()?)
    }

    pub fn list_boards(&self, workspace: &WorkspaceId) -> Result<Vec<Board>, StoreError> {
        let sql = format!(
            "SELECT {BOARD_COLUMNS} FROM boards WHERE workspace = ?1 \
             ORDER BY created_at_ms ASC, id ASC"
        );
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![workspace.as_str()], board_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Removes the board, its columns, and their tasks in one transaction.
    pub fn delete_board(&mut self, id: &BoardId) -> Result<(), StoreError> {
        let now_ms = now_ms();
        let tx = self.write_tx()?;
        if !board_exists_tx(&tx, id.as_str())? {
            return Err(StoreError::UnknownBoard);
        }

        tx.execute(
            "DELETE FROM tasks WHERE column_id IN (SELECT id FROM columns WHERE board_id = ?1)",
            params![id.as_str()],
        )?;
        tx.execute("DELETE FROM columns WHERE board_id = ?1", params![id.as_str()])?;
        tx.execute("DELETE FROM boards WHERE id = ?1", params![id.as_str()])?;
        insert_event_tx(&tx, now_ms, Some(id.as_str()), "board.deleted", "{}")?;
        tx.commit()?;
        Ok(())
    }
}
