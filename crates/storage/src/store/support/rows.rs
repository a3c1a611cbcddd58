#![forbid(unsafe_code)]

use super::super::StoreError;
use bk_core::model::{Board, Column, Task};
use rusqlite::{OptionalExtension, Row, Transaction, params};

pub(crate) const BOARD_COLUMNS: &str = "id, workspace, name, created_at_ms, updated_at_ms";
pub(crate) const COLUMN_COLUMNS: &str =
    "id, board_id, position, title, created_at_ms, updated_at_ms";
pub(crate) const TASK_COLUMNS: &str =
    "id, column_id, position, title, description, created_at_ms, updated_at_ms";

pub(crate) fn board_from_row(row: &Row<'_>) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        workspace_id: row.get(1)?,
        name: row.get(2)?,
        created_at_ms: row.get(3)?,
        updated_at_ms: row.get(4)?,
    })
}

pub(crate) fn column_from_row(row: &Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: row.get(0)?,
        board_id: row.get(1)?,
        position: row.get(2)?,
        title: row.get(3)?,
        created_at_ms: row.get(4)?,
        updated_at_ms: row.get(5)?,
    })
}

pub(crate) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        column_id: row.get(1)?,
        position: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        created_at_ms: row.get(5)?,
        updated_at_ms: row.get(6)?,
    })
}

pub(crate) fn column_by_id_tx(
    tx: &Transaction<'_>,
    id: &str,
) -> Result<Option<Column>, StoreError> {
    let sql = format!("SELECT {COLUMN_COLUMNS} FROM columns WHERE id = ?1");
    Ok(tx
        .query_row(&sql, params![id], column_from_row)
        .optional()?)
}

pub(crate) fn task_by_id_tx(tx: &Transaction<'_>, id: &str) -> Result<Option<Task>, StoreError> {
    let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
    Ok(tx.query_row(&sql, params![id], task_from_row).optional()?)
}
