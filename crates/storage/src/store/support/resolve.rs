#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{OptionalExtension, Transaction, params};

fn id_exists_tx(tx: &Transaction<'_>, table: &str, id: &str) -> Result<bool, StoreError> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ?1");
    Ok(tx
        .query_row(&sql, params![id], |_| Ok(()))
        .optional()?
        .is_some())
}

pub(crate) fn workspace_exists_tx(
    tx: &Transaction<'_>,
    workspace: &str,
) -> Result<bool, StoreError> {
    Ok(tx
        .query_row(
            "SELECT 1 FROM workspaces WHERE workspace = ?1",
            params![workspace],
            |_| Ok(()),
        )
        .optional()?
        .is_some())
}

pub(crate) fn board_exists_tx(tx: &Transaction<'_>, id: &str) -> Result<bool, StoreError> {
    id_exists_tx(tx, "boards", id)
}

/// What kind of entity an id names, if any. Used to tell "destination does
/// not exist" apart from "destination exists but is the wrong kind".
fn classify_id_tx(tx: &Transaction<'_>, id: &str) -> Result<Option<&'static str>, StoreError> {
    for (table, kind) in [
        ("boards", "board"),
        ("columns", "column"),
        ("tasks", "task"),
    ] {
        if id_exists_tx(tx, table, id)? {
            return Ok(Some(kind));
        }
    }
    Ok(None)
}

/// A column move must land in a board.
pub(crate) fn resolve_destination_board_tx(
    tx: &Transaction<'_>,
    id: &str,
) -> Result<(), StoreError> {
    match classify_id_tx(tx, id)? {
        Some("board") => Ok(()),
        Some(actual) => Err(StoreError::WrongParentKind {
            expected: "board",
            actual,
        }),
        None => Err(StoreError::UnknownBoard),
    }
}

/// A task move must land in a column.
pub(crate) fn resolve_destination_column_tx(
    tx: &Transaction<'_>,
    id: &str,
) -> Result<(), StoreError> {
    match classify_id_tx(tx, id)? {
        Some("column") => Ok(()),
        Some(actual) => Err(StoreError::WrongParentKind {
            expected: "column",
            actual,
        }),
        None => Err(StoreError::UnknownColumn),
    }
}
