use axum::extract::State;
use axum::Json;
use thermoloop_core::SystemState;

use crate::state::AppState;

/// GET /state — combined system state.
///
/// The current temperature is a best-effort projection of the latest stored
/// reading, recomputed on every query. If the datastore is unreachable or
/// holds no readings yet, `current_temperature` is null and the setpoint is
/// still served from local state; this endpoint never fails because a
/// dependency did.
pub async fn get_state(State(app): State<AppState>) -> Json<SystemState> {
    let current_temperature = match app.datastore.latest_reading().await {
        Ok(reading) => reading.map(|r| r.temperature),
        Err(e) => {
            tracing::warn!("could not read latest temperature: {e}");
            None
        }
    };

    let target_temperature = *app.target.read().await;

    Json(SystemState {
        current_temperature,
        target_temperature,
    })
}
