#![forbid(unsafe_code)]

use super::{boards, columns, tasks, workspaces};
use crate::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use bk_storage::SqliteStore;
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("bk_api_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn test_state(test_name: &str) -> AppState {
    let store = SqliteStore::open(temp_dir(test_name)).expect("open store");
    AppState::new(store)
}

/// Workspace + board + one column, all through the handlers themselves.
async fn seeded_board(state: &AppState) -> (String, String) {
    workspaces::create(
        State(state.clone()),
        Json(workspaces::CreateWorkspaceBody {
            workspace_id: "ws-main".to_string(),
            name: "Main".to_string(),
        }),
    )
    .await
    .expect("create workspace");

    let Json(board) = boards::create(
        State(state.clone()),
        Json(boards::CreateBoardBody {
            workspace_id: "ws-main".to_string(),
            name: "Roadmap".to_string(),
        }),
    )
    .await
    .expect("create board");

    let Json(column) = columns::create(
        State(state.clone()),
        Json(columns::CreateColumnBody {
            board_id: board.board.id.clone(),
            title: "todo".to_string(),
        }),
    )
    .await
    .expect("create column");

    (board.board.id, column.column.id)
}

#[tokio::test]
async fn router_builds_with_every_route() {
    let _router = super::router(test_state("router_builds"));
}

#[tokio::test]
async fn created_columns_list_in_dense_order() {
    let state = test_state("created_columns_list_dense");
    let (board_id, _first) = seeded_board(&state).await;

    for title in ["doing", "done"] {
        columns::create(
            State(state.clone()),
            Json(columns::CreateColumnBody {
                board_id: board_id.clone(),
                title: title.to_string(),
            }),
        )
        .await
        .expect("create column");
    }

    let Json(listing) = columns::list(
        State(state.clone()),
        Query(columns::ListColumnsParams {
            board_id: board_id.clone(),
        }),
    )
    .await
    .expect("list columns");
    assert_eq!(
        listing
            .columns
            .iter()
            .map(|c| c.position)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[tokio::test]
async fn move_handler_returns_the_relocated_task() {
    let state = test_state("move_handler_relocates");
    let (_board_id, column_id) = seeded_board(&state).await;

    let mut task_ids = Vec::new();
    for title in ["t1", "t2", "t3"] {
        let Json(created) = tasks::create(
            State(state.clone()),
            Json(tasks::CreateTaskBody {
                column_id: column_id.clone(),
                title: title.to_string(),
                description: None,
            }),
        )
        .await
        .expect("create task");
        task_ids.push(created.task.id);
    }

    let Json(moved) = tasks::relocate(
        State(state.clone()),
        Json(tasks::MoveTaskBody {
            task_id: task_ids[2].clone(),
            destination_column_id: column_id.clone(),
            destination_position: 1,
        }),
    )
    .await
    .expect("move task");
    assert_eq!(moved.task.position, 1);

    let Json(listing) = tasks::list(
        State(state.clone()),
        Query(tasks::ListTasksParams {
            column_id: column_id.clone(),
        }),
    )
    .await
    .expect("list tasks");
    assert_eq!(
        listing.tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["t3", "t1", "t2"]
    );
}

#[tokio::test]
async fn unknown_ids_map_to_not_found() {
    let state = test_state("unknown_ids_not_found");
    let (_board_id, column_id) = seeded_board(&state).await;

    let err = tasks::relocate(
        State(state.clone()),
        Json(tasks::MoveTaskBody {
            task_id: "01J0QZ5X7N8R9T2V3W4X5Y6Z7A".to_string(),
            destination_column_id: column_id,
            destination_position: 1,
        }),
    )
    .await
    .expect_err("unknown task");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_kind_destination_maps_to_unprocessable() {
    let state = test_state("wrong_kind_unprocessable");
    let (board_id, column_id) = seeded_board(&state).await;

    let Json(created) = tasks::create(
        State(state.clone()),
        Json(tasks::CreateTaskBody {
            column_id: column_id.clone(),
            title: "t1".to_string(),
            description: None,
        }),
    )
    .await
    .expect("create task");

    let err = tasks::relocate(
        State(state.clone()),
        Json(tasks::MoveTaskBody {
            task_id: created.task.id,
            // A live board id, but boards cannot hold tasks.
            destination_column_id: board_id,
            destination_position: 1,
        }),
    )
    .await
    .expect_err("wrong-kind destination");
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_ids_map_to_bad_request() {
    let state = test_state("malformed_ids_bad_request");

    let err = columns::list(
        State(state.clone()),
        Query(columns::ListColumnsParams {
            board_id: "not a valid id".to_string(),
        }),
    )
    .await
    .expect_err("malformed id");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn audit_endpoint_reports_clean_boards() {
    let state = test_state("audit_reports_clean");
    let (board_id, _column_id) = seeded_board(&state).await;

    let Json(report) = boards::audit(State(state.clone()), Path(board_id))
        .await
        .expect("audit");
    assert!(report.clean);
}
