#![forbid(unsafe_code)]

use crate::{ApiError, AppState};
use axum::Json;
use axum::extract::{Query, State};
use bk_storage::EventRow;
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListEventsParams {
    #[serde(default)]
    pub since: i64,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct EventsResponse {
    pub events: Vec<EventRow>,
}

pub(crate) async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<Json<EventsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let events = state.store().list_events(params.since, limit)?;
    Ok(Json(EventsResponse { events }))
}
