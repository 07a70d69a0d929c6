//! HTTP client for the datastore's recent-readings query.

use std::time::Duration;

use thermoloop_core::{Reading, Result, ThermoError};

/// Per-request timeout. The state endpoint must degrade promptly when the
/// datastore is down, not hang its own callers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Clone)]
pub struct DatastoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl DatastoreClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetch the most recent stored reading, if any.
    ///
    /// Transport failures, error statuses, and unparseable bodies all map
    /// to [`ThermoError::Unavailable`]; the caller decides how to degrade.
    pub async fn latest_reading(&self) -> Result<Option<Reading>> {
        let url = format!("{}/data?limit=1", self.base_url);

        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ThermoError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ThermoError::Unavailable(e.to_string()))?;

        let mut readings: Vec<Reading> = response
            .json()
            .await
            .map_err(|e| ThermoError::Unavailable(e.to_string()))?;

        if readings.is_empty() {
            Ok(None)
        } else {
            Ok(Some(readings.remove(0)))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
