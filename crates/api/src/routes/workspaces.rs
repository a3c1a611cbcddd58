#![forbid(unsafe_code)]

use crate::{ApiError, AppState};
use axum::Json;
use axum::extract::State;
use bk_core::ids::WorkspaceId;
use bk_core::model::Workspace;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateWorkspaceBody {
    pub workspace_id: String,
    pub name: String,
}

#[derive(Serialize)]
pub(crate) struct WorkspaceResponse {
    pub workspace: Workspace,
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkspaceBody>,
) -> Result<Json<WorkspaceResponse>, ApiError> {
    let workspace_id = WorkspaceId::try_new(body.workspace_id)?;
    let workspace = state.store().workspace_init(&workspace_id, &body.name)?;
    Ok(Json(WorkspaceResponse { workspace }))
}
