use serde::{Deserialize, Serialize};

/// Target temperature a control authority starts with, °C.
pub const DEFAULT_TARGET_TEMPERATURE: f64 = 21.0;

/// Combined system state served by the control authority.
///
/// `target_temperature` is the authority's own setpoint.
/// `current_temperature` is a projection of the latest stored reading,
/// recomputed on every query and `None` when no reading is available or the
/// datastore cannot be reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemState {
    pub current_temperature: Option<f64>,
    pub target_temperature: f64,
}
