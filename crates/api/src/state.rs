#![forbid(unsafe_code)]

use bk_storage::SqliteStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handler state. All ordering state lives in the store; the mutex
/// only serializes access to the single connection, and is held for the
/// duration of one synchronous store call.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<SqliteStore>>,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub(crate) fn store(&self) -> MutexGuard<'_, SqliteStore> {
        // A poisoned mutex means a handler panicked mid-call; the store
        // itself rolled back anything uncommitted, so keep serving.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
