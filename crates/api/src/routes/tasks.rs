#![forbid(unsafe_code)]

use crate::{ApiError, AppState};
use axum::Json;
use axum::extract::{Path, Query, State};
use bk_core::ids::{ColumnId, TaskId};
use bk_core::model::Task;
use bk_storage::{CreateTaskRequest, MoveTaskRequest, UpdateTaskRequest};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTaskBody {
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListTasksParams {
    pub column_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTaskBody {
    #[serde(default)]
    pub title: Option<String>,
    /// An omitted field is untouched; an explicit `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoveTaskBody {
    pub task_id: String,
    pub destination_column_id: String,
    pub destination_position: i64,
}

#[derive(Serialize, Debug)]
pub(crate) struct TaskResponse {
    pub task: Task,
}

#[derive(Serialize)]
pub(crate) struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
pub(crate) struct DeletedResponse {
    pub id: String,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    Option::<String>::deserialize(deserializer).map(Some)
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let column_id = ColumnId::try_new(body.column_id)?;
    let task = state.store().create_task(CreateTaskRequest {
        column_id,
        title: body.title,
        description: body.description,
    })?;
    Ok(Json(TaskResponse { task }))
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<TasksResponse>, ApiError> {
    let column_id = ColumnId::try_new(params.column_id)?;
    let tasks = state.store().list_tasks(&column_id)?;
    Ok(Json(TasksResponse { tasks }))
}

pub(crate) async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task_id = TaskId::try_new(id)?;
    let task = state.store().update_task(UpdateTaskRequest {
        task_id,
        title: body.title,
        description: body.description,
    })?;
    Ok(Json(TaskResponse { task }))
}

pub(crate) async fn relocate(
    State(state): State<AppState>,
    Json(body): Json<MoveTaskBody>,
) -> Result<Json<TaskResponse>, ApiError> {
    let request = MoveTaskRequest {
        task_id: TaskId::try_new(body.task_id)?,
        destination_column_id: ColumnId::try_new(body.destination_column_id)?,
        destination_position: body.destination_position,
    };
    let task = state.store().move_task(request)?;
    tracing::debug!(
        task_id = %task.id,
        column_id = %task.column_id,
        position = task.position,
        "task moved"
    );
    Ok(Json(TaskResponse { task }))
}

pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let task_id = TaskId::try_new(id)?;
    state.store().delete_task(&task_id)?;
    Ok(Json(DeletedResponse {
        id: task_id.into_string(),
    }))
}
