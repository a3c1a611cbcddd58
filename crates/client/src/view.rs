#![forbid(unsafe_code)]

use bk_core::model::{Column, Task};

/// What the user currently sees: columns in visual order, each with its
/// tasks in visual order. Vector order is the only ordering that matters
/// here; the server's `position` fields are not recomputed locally.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub board_id: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnView {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl BoardView {
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            columns: Vec::new(),
        }
    }

    /// Appends a fetched column with its fetched tasks; callers feed
    /// columns in server order, so the vectors mirror it.
    pub fn push_column(&mut self, column: Column, tasks: Vec<Task>) {
        self.columns.push(ColumnView {
            id: column.id,
            title: column.title,
            tasks,
        });
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }
}
