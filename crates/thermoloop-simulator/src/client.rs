//! HTTP clients for the simulator's two peers.

use std::time::Duration;

use thermoloop_core::SystemState;

use crate::error::Result;

/// Per-request timeout. A slow peer is treated like an unreachable one so
/// one cycle can never wedge the loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

// ---------------------------------------------------------------------------
// ControlClient
// ---------------------------------------------------------------------------

/// Reads the setpoint from the control authority's state endpoint.
#[derive(Clone)]
pub struct ControlClient {
    http: reqwest::Client,
    base_url: String,
}

impl ControlClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetch the current target temperature.
    pub async fn fetch_setpoint(&self) -> Result<f64> {
        let url = format!("{}/state", self.base_url);
        let body = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let state: SystemState = serde_json::from_str(&body)?;
        Ok(state.target_temperature)
    }
}

// ---------------------------------------------------------------------------
// ReadingSink
// ---------------------------------------------------------------------------

/// Pushes readings into the datastore.
#[derive(Clone)]
pub struct ReadingSink {
    http: reqwest::Client,
    base_url: String,
}

impl ReadingSink {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Report one temperature observation.
    pub async fn push(&self, temperature: f64) -> Result<()> {
        let url = format!("{}/data", self.base_url);
        self.http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&serde_json::json!({ "temperature": temperature }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
