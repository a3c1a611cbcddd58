#![forbid(unsafe_code)]

use super::*;
use bk_core::ids::WorkspaceId;
use bk_core::model::Workspace;
use rusqlite::params;

impl SqliteStore {
    /// Idempotent tenant-row create: a second call with the same id returns
    /// the existing row and changes nothing.
    pub fn workspace_init(
        &mut self,
        workspace: &WorkspaceId,
        name: &str,
    ) -> Result<Workspace, StoreError> {
        let name = normalize_title(name.to_string())?;
        let now_ms = now_ms();

        let tx = self.write_tx()?;
        tx.execute(
            "INSERT OR IGNORE INTO workspaces(workspace, name, created_at_ms) VALUES (?1, ?2, ?3)",
            params![workspace.as_str(), name, now_ms],
        )?;
        let row = tx.query_row(
            "SELECT workspace, name, created_at_ms FROM workspaces WHERE workspace = ?1",
            params![workspace.as_str()],
            |row| {
                Ok(Workspace {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at_ms: row.get(2)?,
                })
            },
        )?;
        tx.commit()?;
        Ok(row)
    }
}
