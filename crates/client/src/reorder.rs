#![forbid(unsafe_code)]

use crate::view::BoardView;

/// Drop coordinates from the drag layer: 0-based indices over the
/// currently displayed lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDrag {
    pub source_column_id: String,
    pub source_index: usize,
    pub destination_column_id: String,
    pub destination_index: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDrag {
    pub source_index: usize,
    pub destination_index: usize,
}

/// The one request a completed drop turns into. Destination positions are
/// 1-based, matching the stored ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveRequest {
    Task {
        task_id: String,
        destination_column_id: String,
        destination_position: i64,
    },
    Column {
        column_id: String,
        destination_board_id: String,
        destination_position: i64,
    },
}

/// Two explicit layers: `confirmed` is the last snapshot the server
/// acknowledged, `view` is what the user sees right now. A drop mutates
/// only `view`; the server stays the single source of truth and replaces
/// both layers on the next fetch.
#[derive(Clone, Debug)]
pub struct ReorderState {
    confirmed: BoardView,
    view: BoardView,
}

impl ReorderState {
    pub fn new(snapshot: BoardView) -> Self {
        Self {
            confirmed: snapshot.clone(),
            view: snapshot,
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn confirmed(&self) -> &BoardView {
        &self.confirmed
    }

    pub fn board_id(&self) -> &str {
        &self.view.board_id
    }

    /// Applies a task drop to the view and returns the single move request
    /// to send, or `None` when nothing should be sent: the drop landed
    /// where it started, or the drag data no longer matches the view
    /// (another refresh slid in under the pointer) and is dropped whole.
    pub fn drag_task(&mut self, drag: TaskDrag) -> Option<MoveRequest> {
        if drag.source_column_id == drag.destination_column_id
            && drag.source_index == drag.destination_index
        {
            return None;
        }

        let Some(source_column) = self.view.column_index(&drag.source_column_id) else {
            tracing::warn!(column_id = %drag.source_column_id, "stale drag: unknown source column");
            return None;
        };
        let Some(destination_column) = self.view.column_index(&drag.destination_column_id) else {
            tracing::warn!(column_id = %drag.destination_column_id, "stale drag: unknown destination column");
            return None;
        };

        let source_len = self.view.columns[source_column].tasks.len();
        if drag.source_index >= source_len {
            tracing::warn!(
                index = drag.source_index,
                len = source_len,
                "stale drag: source index out of range"
            );
            return None;
        }
        let destination_cap = if source_column == destination_column {
            // Same list: the item is removed before reinsertion, so the
            // last valid slot is len - 1.
            source_len - 1
        } else {
            self.view.columns[destination_column].tasks.len()
        };
        if drag.destination_index > destination_cap {
            tracing::warn!(
                index = drag.destination_index,
                cap = destination_cap,
                "stale drag: destination index out of range"
            );
            return None;
        }

        let task = self.view.columns[source_column]
            .tasks
            .remove(drag.source_index);
        let task_id = task.id.clone();
        self.view.columns[destination_column]
            .tasks
            .insert(drag.destination_index, task);

        Some(MoveRequest::Task {
            task_id,
            destination_column_id: drag.destination_column_id,
            destination_position: drag.destination_index as i64 + 1,
        })
    }

    /// Same contract as [`ReorderState::drag_task`], for reordering the
    /// columns of the board itself.
    pub fn drag_column(&mut self, drag: ColumnDrag) -> Option<MoveRequest> {
        if drag.source_index == drag.destination_index {
            return None;
        }
        let len = self.view.columns.len();
        if drag.source_index >= len || drag.destination_index >= len {
            tracing::warn!(
                source = drag.source_index,
                destination = drag.destination_index,
                len,
                "stale drag: column index out of range"
            );
            return None;
        }

        let column = self.view.columns.remove(drag.source_index);
        let column_id = column.id.clone();
        self.view.columns.insert(drag.destination_index, column);

        Some(MoveRequest::Column {
            column_id,
            destination_board_id: self.view.board_id.clone(),
            destination_position: drag.destination_index as i64 + 1,
        })
    }

    /// A request failed: the view falls back to the last acknowledged
    /// ordering, never to something in between.
    pub fn revert(&mut self) {
        self.view = self.confirmed.clone();
    }

    /// A fetch completed: the server ordering replaces both layers.
    pub fn confirm(&mut self, snapshot: BoardView) {
        self.confirmed = snapshot.clone();
        self.view = snapshot;
    }
}
