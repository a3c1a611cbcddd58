#![forbid(unsafe_code)]

use super::super::*;
use bk_core::model::Column;
use serde_json::json;

impl SqliteStore {
    /// Relocates a column within its board or into another board. One
    /// transaction covers the placement read, both range shifts, and the
    /// final write, so concurrent movers serialize on the database and
    /// every reader sees either the old dense ordering or the new one.
    pub fn move_column(&mut self, request: MoveColumnRequest) -> Result<Column, StoreError> {
        let MoveColumnRequest {
            column_id,
            destination_board_id,
            destination_position,
        } = request;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        let Some(source) = placement_tx(&tx, BOARD_SCOPE, column_id.as_str())? else {
            return Err(StoreError::UnknownColumn);
        };
        resolve_destination_board_tx(&tx, destination_board_id.as_str())?;

        let after = move_item_tx(
            &tx,
            BOARD_SCOPE,
            column_id.as_str(),
            &source,
            destination_board_id.as_str(),
            destination_position,
            now_ms,
        )?;
        if after != source {
            insert_event_tx(
                &tx,
                now_ms,
                Some(column_id.as_str()),
                "column.moved",
                &json!({
                    "from": { "boardId": source.parent_id, "position": source.position },
                    "to": { "boardId": after.parent_id, "position": after.position },
                })
                .to_string(),
            )?;
        }

        let column =
            column_by_id_tx(&tx, column_id.as_str())?.ok_or(StoreError::UnknownColumn)?;
        tx.commit()?;
        Ok(column)
    }
}
