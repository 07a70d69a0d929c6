use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// Window served by `GET /data` when no usable `limit` is given.
pub const DEFAULT_LIMIT: usize = 10;

/// POST /data — store a new temperature reading.
///
/// The timestamp is assigned here, at ingestion, so ordering never depends
/// on the producer's clock. Validation happens before the store is touched;
/// a rejected payload leaves the history unchanged.
pub async fn append_reading(
    State(app): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let temperature = thermoloop_core::temperature::parse_temperature(&body)?;

    let reading = app.history.write().await.append(temperature);
    tracing::info!("stored reading {:.2}°C", reading.temperature);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "reading stored",
            "temperature": reading.temperature,
            "timestamp": reading.timestamp,
        })),
    ))
}

/// GET /data — recent readings, newest first.
///
/// `?limit=N` caps the window to the last N readings by arrival order. A
/// missing or malformed value falls back to the default window rather than
/// erroring; reads never fail.
pub async fn list_readings(
    State(app): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let limit = params
        .get("limit")
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let readings = app.history.read().await.recent(limit);
    Json(serde_json::json!(readings))
}
