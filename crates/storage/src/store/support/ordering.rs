#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{OptionalExtension, Transaction, params};

/// Selects which of the two ordered-collection kinds a primitive operates
/// on: columns within a board, or tasks within a column. Both share the
/// same shape (parent id + dense 1-based position), so the shift and move
/// primitives are written once against this descriptor.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScopeKind {
    pub table: &'static str,
    pub parent_col: &'static str,
}

/// Columns ordered within their board.
pub(crate) const BOARD_SCOPE: ScopeKind = ScopeKind {
    table: "columns",
    parent_col: "board_id",
};

/// Tasks ordered within their column.
pub(crate) const COLUMN_SCOPE: ScopeKind = ScopeKind {
    table: "tasks",
    parent_col: "column_id",
};

/// Where an ordered item currently sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    pub parent_id: String,
    pub position: i64,
}

pub(crate) fn placement_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    item_id: &str,
) -> Result<Option<Placement>, StoreError> {
    let sql = format!(
        "SELECT {parent}, position FROM {table} WHERE id = ?1",
        parent = scope.parent_col,
        table = scope.table,
    );
    Ok(tx
        .query_row(&sql, params![item_id], |row| {
            Ok(Placement {
                parent_id: row.get(0)?,
                position: row.get(1)?,
            })
        })
        .optional()?)
}

pub(crate) fn scope_len_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    parent_id: &str,
) -> Result<i64, StoreError> {
    let sql = format!(
        "SELECT COUNT(*) FROM {table} WHERE {parent} = ?1",
        table = scope.table,
        parent = scope.parent_col,
    );
    Ok(tx.query_row(&sql, params![parent_id], |row| row.get(0))?)
}

/// Renumbers every item with position in `[from_pos, to_pos]` to
/// `position + 1`. Empty ranges are a no-op.
///
/// The UNIQUE(parent, position) constraint is checked per row while the
/// UPDATE runs, and SQLite visits rows in unspecified order, so the range is
/// first rewritten to negated target positions (a value space no live row
/// occupies) and then flipped positive. Nothing outside the enclosing
/// transaction ever sees the negated rows.
pub(crate) fn shift_up_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    parent_id: &str,
    from_pos: i64,
    to_pos: i64,
) -> Result<(), StoreError> {
    if from_pos > to_pos {
        return Ok(());
    }
    let negate = format!(
        "UPDATE {table} SET position = -(position + 1) \
         WHERE {parent} = ?1 AND position BETWEEN ?2 AND ?3",
        table = scope.table,
        parent = scope.parent_col,
    );
    tx.execute(&negate, params![parent_id, from_pos, to_pos])?;
    flip_negated_tx(tx, scope, parent_id)
}

/// Renumbers every item with position in `[from_pos, to_pos]` to
/// `position − 1`. Empty ranges are a no-op. `from_pos` must be at least 2;
/// shifting position 1 down would leave the scope without a first slot.
pub(crate) fn shift_down_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    parent_id: &str,
    from_pos: i64,
    to_pos: i64,
) -> Result<(), StoreError> {
    if from_pos > to_pos {
        return Ok(());
    }
    if from_pos <= 1 {
        return Err(StoreError::InvalidInput(
            "cannot shift a range below position 1",
        ));
    }
    let negate = format!(
        "UPDATE {table} SET position = -(position - 1) \
         WHERE {parent} = ?1 AND position BETWEEN ?2 AND ?3",
        table = scope.table,
        parent = scope.parent_col,
    );
    tx.execute(&negate, params![parent_id, from_pos, to_pos])?;
    flip_negated_tx(tx, scope, parent_id)
}

fn flip_negated_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    parent_id: &str,
) -> Result<(), StoreError> {
    let flip = format!(
        "UPDATE {table} SET position = -position WHERE {parent} = ?1 AND position < 0",
        table = scope.table,
        parent = scope.parent_col,
    );
    tx.execute(&flip, params![parent_id])?;
    Ok(())
}

/// Takes the moved item out of the dense sequence for the duration of the
/// shifts. Position 0 is never a live slot, so the parked row cannot collide
/// with anything the shifts produce.
fn park_tx(tx: &Transaction<'_>, scope: ScopeKind, item_id: &str) -> Result<(), StoreError> {
    let sql = format!(
        "UPDATE {table} SET position = 0 WHERE id = ?1",
        table = scope.table,
    );
    tx.execute(&sql, params![item_id])?;
    Ok(())
}

fn place_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    item_id: &str,
    parent_id: &str,
    position: i64,
    now_ms: i64,
) -> Result<(), StoreError> {
    let sql = format!(
        "UPDATE {table} SET {parent} = ?2, position = ?3, updated_at_ms = ?4 WHERE id = ?1",
        table = scope.table,
        parent = scope.parent_col,
    );
    tx.execute(&sql, params![item_id, parent_id, position, now_ms])?;
    Ok(())
}

/// The move executor core, shared by both kinds. The caller has read the
/// item's current placement and verified the destination parent exists and
/// is of the right kind; this renumbers whatever the move touches and writes
/// the item's final placement, all inside the caller's transaction.
///
/// The requested position is clamped to `[1, count-after-move]` against
/// counts read in this same transaction; a stale client index lands on the
/// nearest valid slot instead of failing.
///
/// Returns the final placement. When it equals `source` the store has not
/// been touched.
pub(crate) fn move_item_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    item_id: &str,
    source: &Placement,
    destination_parent_id: &str,
    requested_position: i64,
    now_ms: i64,
) -> Result<Placement, StoreError> {
    if source.parent_id == destination_parent_id {
        let count = scope_len_tx(tx, scope, destination_parent_id)?;
        let destination = requested_position.clamp(1, count);
        if destination == source.position {
            return Ok(source.clone());
        }

        park_tx(tx, scope, item_id)?;
        if destination > source.position {
            // Later slot: everything between the vacated slot and the
            // destination slides toward the gap.
            shift_down_tx(tx, scope, destination_parent_id, source.position + 1, destination)?;
        } else {
            // Earlier slot: everything from the destination up to the
            // vacated slot makes room.
            shift_up_tx(tx, scope, destination_parent_id, destination, source.position - 1)?;
        }
        place_tx(tx, scope, item_id, destination_parent_id, destination, now_ms)?;

        return Ok(Placement {
            parent_id: destination_parent_id.to_string(),
            position: destination,
        });
    }

    let source_count = scope_len_tx(tx, scope, &source.parent_id)?;
    let destination_count = scope_len_tx(tx, scope, destination_parent_id)?;
    let destination = requested_position.clamp(1, destination_count + 1);

    park_tx(tx, scope, item_id)?;
    // Close the gap the item leaves behind, then open one at the landing
    // slot. A tail append (destination one past the current count) shifts
    // nothing on the destination side.
    shift_down_tx(tx, scope, &source.parent_id, source.position + 1, source_count)?;
    shift_up_tx(tx, scope, destination_parent_id, destination, destination_count)?;
    place_tx(tx, scope, item_id, destination_parent_id, destination, now_ms)?;

    Ok(Placement {
        parent_id: destination_parent_id.to_string(),
        position: destination,
    })
}

pub(crate) fn positions_tx(
    tx: &Transaction<'_>,
    scope: ScopeKind,
    parent_id: &str,
) -> Result<Vec<i64>, StoreError> {
    let sql = format!(
        "SELECT position FROM {table} WHERE {parent} = ?1 ORDER BY position ASC",
        table = scope.table,
        parent = scope.parent_col,
    );
    let mut stmt = tx.prepare(&sql)?;
    let rows = stmt.query_map(params![parent_id], |row| row.get::<_, i64>(0))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// A scope is dense when its ascending positions are exactly 1..=N.
pub(crate) fn is_dense(positions: &[i64]) -> bool {
    positions
        .iter()
        .enumerate()
        .all(|(index, position)| *position == index as i64 + 1)
}
