#![forbid(unsafe_code)]

use bk_core::ids::{BoardId, ColumnId, TaskId, WorkspaceId};

#[derive(Clone, Debug)]
pub struct CreateBoardRequest {
    pub workspace_id: WorkspaceId,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct CreateColumnRequest {
    pub board_id: BoardId,
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct RenameColumnRequest {
    pub column_id: ColumnId,
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct MoveColumnRequest {
    pub column_id: ColumnId,
    pub destination_board_id: BoardId,
    /// 1-based slot in the destination board. Clamped inside the move
    /// transaction to the valid range, so a stale index from a client that
    /// missed a concurrent edit degrades to the nearest valid slot.
    pub destination_position: i64,
}

#[derive(Clone, Debug)]
pub struct CreateTaskRequest {
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub struct UpdateTaskRequest {
    pub task_id: TaskId,
    /// `None` leaves the field untouched.
    pub title: Option<String>,
    /// Outer `None` leaves the field untouched; `Some(None)` clears it.
    pub description: Option<Option<String>>,
}

#[derive(Clone, Debug)]
pub struct MoveTaskRequest {
    pub task_id: TaskId,
    pub destination_column_id: ColumnId,
    /// 1-based slot in the destination column; same clamping contract as
    /// [`MoveColumnRequest::destination_position`].
    pub destination_position: i64,
}
