#![forbid(unsafe_code)]

use super::*;
use bk_core::ids::BoardId;
use serde::Serialize;

/// One scope whose positions are not exactly 1..=N.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingFinding {
    /// "columns" for a board scope, "tasks" for a column scope.
    pub kind: &'static str,
    pub parent_id: String,
    pub positions: Vec<i64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingAudit {
    pub board_id: String,
    pub findings: Vec<OrderingFinding>,
}

impl OrderingAudit {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

impl SqliteStore {
    /// Re-reads every scope under a board and reports any that is not
    /// dense. Committed operations of this store never produce findings;
    /// a non-empty report means something else wrote the tables and is an
    /// alert, never something to repair in place.
    pub fn audit_board(&self, board_id: &BoardId) -> Result<OrderingAudit, StoreError> {
        // One read snapshot for the whole walk.
        let tx = self.conn().unchecked_transaction()?;
        if !board_exists_tx(&tx, board_id.as_str())? {
            return Err(StoreError::UnknownBoard);
        }

        let mut findings = Vec::new();

        let column_positions = positions_tx(&tx, BOARD_SCOPE, board_id.as_str())?;
        if !is_dense(&column_positions) {
            findings.push(OrderingFinding {
                kind: "columns",
                parent_id: board_id.as_str().to_string(),
                positions: column_positions,
            });
        }

        let mut stmt = tx.prepare("SELECT id FROM columns WHERE board_id = ?1 ORDER BY id ASC")?;
        let column_ids = stmt
            .query_map(rusqlite::params![board_id.as_str()], |row| {
                row.get::<_, String>(0)
            })?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);

        for column_id in column_ids {
            let task_positions = positions_tx(&tx, COLUMN_SCOPE, &column_id)?;
            if !is_dense(&task_positions) {
                findings.push(OrderingFinding {
                    kind: "tasks",
                    parent_id: column_id,
                    positions: task_positions,
                });
            }
        }

        Ok(OrderingAudit {
            board_id: board_id.as_str().to_string(),
            findings,
        })
    }
}
