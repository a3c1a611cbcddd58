#![forbid(unsafe_code)]

use crate::{ApiError, AppState};
use axum::Json;
use axum::extract::{Path, Query, State};
use bk_core::ids::{BoardId, WorkspaceId};
use bk_core::model::Board;
use bk_storage::{CreateBoardRequest, OrderingAudit};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBoardBody {
    pub workspace_id: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListBoardsParams {
    pub workspace_id: String,
}

#[derive(Serialize)]
pub(crate) struct BoardResponse {
    pub board: Board,
}

#[derive(Serialize)]
pub(crate) struct BoardsResponse {
    pub boards: Vec<Board>,
}

#[derive(Serialize)]
pub(crate) struct DeletedResponse {
    pub id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuditResponse {
    pub clean: bool,
    #[serde(flatten)]
    pub audit: OrderingAudit,
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateBoardBody>,
) -> Result<Json<BoardResponse>, ApiError> {
    let workspace_id = WorkspaceId::try_new(body.workspace_id)?;
    let board = state.store().create_board(CreateBoardRequest {
        workspace_id,
        name: body.name,
    })?;
    tracing::info!(board_id = %board.id, "board created");
    Ok(Json(BoardResponse { board }))
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListBoardsParams>,
) -> Result<Json<BoardsResponse>, ApiError> {
    let workspace_id = WorkspaceId::try_new(params.workspace_id)?;
    let boards = state.store().list_boards(&workspace_id)?;
    Ok(Json(BoardsResponse { boards }))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let board_id = BoardId::try_new(id)?;
    state.store().delete_board(&board_id)?;
    tracing::info!(board_id = %board_id, "board deleted");
    Ok(Json(DeletedResponse {
        id: board_id.into_string(),
    }))
}

pub(crate) async fn audit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AuditResponse>, ApiError> {
    let board_id = BoardId::try_new(id)?;
    let audit = state.store().audit_board(&board_id)?;
    if !audit.is_clean() {
        // Fatal by definition; reported to the operator, never repaired.
        tracing::error!(board_id = %board_id, findings = audit.findings.len(),
            "ordering audit found corrupt scopes");
    }
    Ok(Json(AuditResponse {
        clean: audit.is_clean(),
        audit,
    }))
}
