#![forbid(unsafe_code)]

use bk_core::ids::{BoardId, ColumnId, WorkspaceId};
use bk_storage::{
    CreateBoardRequest, CreateColumnRequest, CreateTaskRequest, MoveTaskRequest, SqliteStore,
    StoreError,
};
use rusqlite::{Connection, params};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("bk_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn store_with_board(test_name: &str) -> (SqliteStore, BoardId) {
    let mut store = SqliteStore::open(temp_dir(test_name)).expect("open store");
    let workspace = WorkspaceId::try_new("ws-main").expect("workspace id");
    store.workspace_init(&workspace, "Main").expect("workspace init");
    let board = store
        .create_board(CreateBoardRequest {
            workspace_id: workspace,
            name: "Roadmap".to_string(),
        })
        .expect("create board");
    let board_id = BoardId::try_new(board.id).expect("board id");
    (store, board_id)
}

fn add_column(store: &mut SqliteStore, board_id: &BoardId, title: &str) -> ColumnId {
    let column = store
        .create_column(CreateColumnRequest {
            board_id: board_id.clone(),
            title: title.to_string(),
        })
        .expect("create column");
    ColumnId::try_new(column.id).expect("column id")
}

#[test]
fn creates_append_at_dense_tail_positions() {
    let (mut store, board_id) = store_with_board("creates_append_at_dense_tail_positions");
    for title in ["todo", "doing", "done"] {
        add_column(&mut store, &board_id, title);
    }

    let columns = store.list_columns(&board_id).expect("list columns");
    assert_eq!(
        columns.iter().map(|c| c.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        columns.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
        vec!["todo", "doing", "done"]
    );
}

#[test]
fn delete_closes_the_gap_it_leaves() {
    let (mut store, board_id) = store_with_board("delete_closes_the_gap_it_leaves");
    let _a = add_column(&mut store, &board_id, "a");
    let b = add_column(&mut store, &board_id, "b");
    let _c = add_column(&mut store, &board_id, "c");
    let _d = add_column(&mut store, &board_id, "d");

    store.delete_column(&b).expect("delete column");

    let columns = store.list_columns(&board_id).expect("list columns");
    assert_eq!(
        columns.iter().map(|c| c.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        columns.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
        vec!["a", "c", "d"]
    );
}

#[test]
fn task_delete_renumbers_its_column() {
    let (mut store, board_id) = store_with_board("task_delete_renumbers_its_column");
    let column_id = add_column(&mut store, &board_id, "todo");
    let mut task_ids = Vec::new();
    for title in ["t1", "t2", "t3"] {
        let task = store
            .create_task(CreateTaskRequest {
                column_id: column_id.clone(),
                title: title.to_string(),
                description: None,
            })
            .expect("create task");
        task_ids.push(task.id);
    }

    let middle = bk_core::ids::TaskId::try_new(task_ids[1].clone()).expect("task id");
    store.delete_task(&middle).expect("delete task");

    let tasks = store.list_tasks(&column_id).expect("list tasks");
    assert_eq!(
        tasks.iter().map(|t| t.position).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(
        tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["t1", "t3"]
    );
}

#[test]
fn out_of_range_destinations_clamp_to_valid_slots() {
    let (mut store, board_id) = store_with_board("out_of_range_destinations_clamp");
    let column_id = add_column(&mut store, &board_id, "todo");
    let mut task_ids = Vec::new();
    for title in ["t1", "t2", "t3"] {
        let task = store
            .create_task(CreateTaskRequest {
                column_id: column_id.clone(),
                title: title.to_string(),
                description: None,
            })
            .expect("create task");
        task_ids.push(bk_core::ids::TaskId::try_new(task.id).expect("task id"));
    }

    let moved = store
        .move_task(MoveTaskRequest {
            task_id: task_ids[0].clone(),
            destination_column_id: column_id.clone(),
            destination_position: 99,
        })
        .expect("clamped tail move");
    assert_eq!(moved.position, 3);

    let moved = store
        .move_task(MoveTaskRequest {
            task_id: task_ids[2].clone(),
            destination_column_id: column_id.clone(),
            destination_position: -5,
        })
        .expect("clamped head move");
    assert_eq!(moved.position, 1);

    let tasks = store.list_tasks(&column_id).expect("list tasks");
    assert_eq!(
        tasks.iter().map(|t| t.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn audit_is_clean_on_a_healthy_board_and_flags_a_doctored_one() {
    let (mut store, board_id) = store_with_board("audit_flags_doctored_board");
    let column_id = add_column(&mut store, &board_id, "todo");
    for title in ["t1", "t2"] {
        store
            .create_task(CreateTaskRequest {
                column_id: column_id.clone(),
                title: title.to_string(),
                description: None,
            })
            .expect("create task");
    }

    let audit = store.audit_board(&board_id).expect("audit");
    assert!(audit.is_clean(), "expected clean audit, got {audit:?}");

    // Poke a gap into the task scope behind the store's back.
    let db_path = store.storage_dir().join("boardkit.db");
    let raw = Connection::open(&db_path).expect("open raw connection");
    raw.execute(
        "UPDATE tasks SET position = 7 WHERE position = 2 AND column_id = ?1",
        params![column_id.as_str()],
    )
    .expect("doctor position");

    let audit = store.audit_board(&board_id).expect("audit");
    assert_eq!(audit.findings.len(), 1);
    assert_eq!(audit.findings[0].kind, "tasks");
    assert_eq!(audit.findings[0].positions, vec![1, 7]);

    // The read path trips over the same corruption instead of passing it on.
    let err = store.list_tasks(&column_id).expect_err("corrupt listing");
    assert!(matches!(err, StoreError::CorruptOrdering { .. }));
}

#[test]
fn workspace_init_is_idempotent() {
    let dir = temp_dir("workspace_init_is_idempotent");
    let mut store = SqliteStore::open(&dir).expect("open store");
    let workspace = WorkspaceId::try_new("ws-main").expect("workspace id");

    let first = store.workspace_init(&workspace, "Main").expect("first init");
    let second = store
        .workspace_init(&workspace, "Renamed")
        .expect("second init");
    assert_eq!(first, second, "second init must not overwrite the row");
}

#[test]
fn board_delete_cascades_columns_and_tasks() {
    let (mut store, board_id) = store_with_board("board_delete_cascades");
    let column_id = add_column(&mut store, &board_id, "todo");
    store
        .create_task(CreateTaskRequest {
            column_id: column_id.clone(),
            title: "t1".to_string(),
            description: None,
        })
        .expect("create task");

    store.delete_board(&board_id).expect("delete board");

    assert!(store.get_board(&board_id).expect("get board").is_none());
    assert!(store.get_column(&column_id).expect("get column").is_none());

    let db_path = store.storage_dir().join("boardkit.db");
    let raw = Connection::open(&db_path).expect("open raw connection");
    let tasks: i64 = raw
        .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
        .expect("count tasks");
    assert_eq!(tasks, 0);
}
