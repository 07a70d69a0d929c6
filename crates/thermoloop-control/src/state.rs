use std::sync::Arc;
use tokio::sync::RwLock;

use crate::datastore::DatastoreClient;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The setpoint. This service is its only mutator; the scalar is
    /// replaced whole under the write lock, last write wins.
    pub target: Arc<RwLock<f64>>,
    pub datastore: DatastoreClient,
}

impl AppState {
    pub fn new(datastore_url: impl Into<String>, initial_target: f64) -> Self {
        Self {
            target: Arc::new(RwLock::new(initial_target)),
            datastore: DatastoreClient::new(reqwest::Client::new(), datastore_url),
        }
    }
}
