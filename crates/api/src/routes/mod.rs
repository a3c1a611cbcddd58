#![forbid(unsafe_code)]

mod boards;
mod columns;
mod events;
mod tasks;
mod workspaces;

#[cfg(test)]
mod tests;

use crate::AppState;
use axum::Router;
use axum::routing::{get, patch, post};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/workspaces", post(workspaces::create))
        .route("/api/boards", post(boards::create).get(boards::list))
        .route("/api/boards/:id", axum::routing::delete(boards::remove))
        .route("/api/boards/:id/audit", get(boards::audit))
        .route("/api/columns", post(columns::create).get(columns::list))
        .route("/api/columns/move", post(columns::relocate))
        .route(
            "/api/columns/:id",
            patch(columns::rename).delete(columns::remove),
        )
        .route("/api/tasks", post(tasks::create).get(tasks::list))
        .route("/api/tasks/move", post(tasks::relocate))
        .route("/api/tasks/:id", patch(tasks::update).delete(tasks::remove))
        .route("/api/events", get(events::list))
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": "bk_api",
    }))
}
