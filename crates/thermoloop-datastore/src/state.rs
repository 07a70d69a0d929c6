use std::sync::Arc;
use thermoloop_core::HistoryStore;
use tokio::sync::RwLock;

/// Shared application state passed to all route handlers.
///
/// The history store is the only shared mutable resource. The write lock is
/// held just long enough to append a single record, so a concurrent reader
/// can never observe a partially stored reading.
#[derive(Clone, Default)]
pub struct AppState {
    pub history: Arc<RwLock<HistoryStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            history: Arc::new(RwLock::new(HistoryStore::new())),
        }
    }
}
