use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// POST /setpoint — replace the target temperature.
///
/// Last write wins; no history is kept. Invalid input is rejected before
/// the setpoint is touched.
pub async fn set_setpoint(
    State(app): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let new_target = thermoloop_core::temperature::parse_temperature(&body)?;

    *app.target.write().await = new_target;
    tracing::info!("new target temperature set to {new_target:.1}°C");

    Ok(Json(serde_json::json!({
        "message": "target temperature updated",
        "new_target": new_target,
    })))
}
