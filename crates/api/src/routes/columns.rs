#![forbid(unsafe_code)]

use crate::{ApiError, AppState};
use axum::Json;
use axum::extract::{Path, Query, State};
use bk_core::ids::{BoardId, ColumnId};
use bk_core::model::Column;
use bk_storage::{CreateColumnRequest, MoveColumnRequest, RenameColumnRequest};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateColumnBody {
    pub board_id: String,
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListColumnsParams {
    pub board_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenameColumnBody {
    pub title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveColumnBody {
    pub column_id: String,
    pub destination_board_id: String,
    pub destination_position: i64,
}

#[derive(Serialize)]
pub(crate) struct ColumnResponse {
    pub column: Column,
}

#[derive(Serialize, Debug)]
pub(crate) struct ColumnsResponse {
    pub columns: Vec<Column>,
}

#[derive(Serialize)]
pub(crate) struct DeletedResponse {
    pub id: String,
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateColumnBody>,
) -> Result<Json<ColumnResponse>, ApiError> {
    let board_id = BoardId::try_new(body.board_id)?;
    let column = state.store().create_column(CreateColumnRequest {
        board_id,
        title: body.title,
    })?;
    Ok(Json(ColumnResponse { column }))
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListColumnsParams>,
) -> Result<Json<ColumnsResponse>, ApiError> {
    let board_id = BoardId::try_new(params.board_id)?;
    let columns = state.store().list_columns(&board_id)?;
    Ok(Json(ColumnsResponse { columns }))
}

pub(crate) async fn rename(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<RenameColumnBody>,
) -> Result<Json<ColumnResponse>, ApiError> {
    let column_id = ColumnId::try_new(id)?;
    let column = state.store().rename_column(RenameColumnRequest {
        column_id,
        title: body.title,
    })?;
    Ok(Json(ColumnResponse { column }))
}

pub(crate) async fn relocate(
    State(state): State<AppState>,
    Json(body): Json<MoveColumnBody>,
) -> Result<Json<ColumnResponse>, ApiError> {
    let request = MoveColumnRequest {
        column_id: ColumnId::try_new(body.column_id)?,
        destination_board_id: BoardId::try_new(body.destination_board_id)?,
        destination_position: body.destination_position,
    };
    let column = state.store().move_column(request)?;
    tracing::debug!(
        column_id = %column.id,
        board_id = %column.board_id,
        position = column.position,
        "column moved"
    );
    Ok(Json(ColumnResponse { column }))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let column_id = ColumnId::try_new(id)?;
    state.store().delete_column(&column_id)?;
    Ok(Json(DeletedResponse {
        id: column_id.into_string(),
    }))
}
