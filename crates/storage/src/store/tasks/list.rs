#![forbid(unsafe_code)]

use super::super::*;
use bk_core::ids::{ColumnId, TaskId};
use bk_core::model::Task;
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Tasks of a column, ascending by position, with the same density
    /// tripwire as [`SqliteStore::list_columns`].
    pub fn list_tasks(&self, column_id: &ColumnId) -> Result<Vec<Task>, StoreError> {
        let sql =
            format!("SELECT {TASK_COLUMNS} FROM tasks WHERE column_id = ?1 ORDER BY position ASC");
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![column_id.as_str()], task_from_row)?;
        let tasks = rows.collect::<Result<Vec<_>, _>>()?;

        let positions: Vec<i64> = tasks.iter().map(|task| task.position).collect();
        if !is_dense(&positions) {
            return Err(StoreError::CorruptOrdering {
                parent_id: column_id.as_str().to_string(),
                positions,
            });
        }
        Ok(tasks)
    }

    pub fn get_task(&self, id: &TaskId) -> Result<Option<Task>, StoreError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1");
        Ok(self
            .conn()
            .query_row(&sql, params![id.as_str()], task_from_row)
            .optional()?)
    }
}
