#![forbid(unsafe_code)]

mod audit;
mod boards;
mod columns;
mod error;
mod events;
mod requests;
mod support;
mod tasks;
mod workspaces;

pub use audit::{OrderingAudit, OrderingFinding};
pub use error::StoreError;
pub use events::EventRow;
pub use requests::*;

pub(crate) use events::insert_event_tx;
pub(crate) use support::*;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DB_FILE: &str = "boardkit.db";

/// SQLite-backed position store. Columns are ordered within their board and
/// tasks within their column; every position sequence is kept dense (exactly
/// 1..=N per parent scope) and every multi-row change runs inside a single
/// transaction, so no other connection ever observes a gap or a duplicate.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let conn = Connection::open(storage_dir.join(DB_FILE))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        install_schema(&conn)?;

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Begins a write transaction. IMMEDIATE takes the write lock up front,
    /// so two stores racing on the same database serialize here instead of
    /// failing on a later lock upgrade.
    pub(crate) fn write_tx(&mut self) -> Result<Transaction<'_>, StoreError> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
