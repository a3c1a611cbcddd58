#![forbid(unsafe_code)]

use super::super::*;
use bk_core::ids::{BoardId, ColumnId};
use bk_core::model::Column;
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Columns of a board, ascending by position. The returned sequence is
    /// always exactly 1..=N; a scope that reads back otherwise is reported
    /// as corrupt rather than passed through.
    pub fn list_columns(&self, board_id: &BoardId) -> Result<Vec<Column>, StoreError> {
        let sql = format!(
            "SELECT {COLUMN_COLUMNS} FROM columns WHERE board_id = ?1 ORDER BY position ASC"
        );
        let mut stmt = self.conn().prepare(&sql)?;
        let rows = stmt.query_map(params![board_id.as_str()], column_from_row)?;
        let columns = rows.collect::<Result<Vec<_>, _>>()?;

        let positions: Vec<i64> = columns.iter().map(|column| column.position).collect();
        if !is_dense(&positions) {
            return Err(StoreError::CorruptOrdering {
                parent_id: board_id.as_str().to_string(),
                positions,
            });
        }
        Ok(columns)
    }

    pub fn get_column(&self, id: &ColumnId) -> Result<Option<Column>, StoreError> {
        let sql = format!("SELECT {COLUMN_COLUMNS} FROM columns WHERE id = ?1");
        Ok(self
            .conn()
            .query_row(&sql, params![id.as_str()], column_from_row)
            .optional()?)
    }
}
