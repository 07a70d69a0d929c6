//! `thermoloop-core` — shared domain model for the thermoloop services.
//!
//! Holds the types every process agrees on (readings, combined system
//! state), the reading history owned by the datastore, request-payload
//! validation, and the error taxonomy. No I/O and no HTTP live here.

pub mod error;
pub mod reading;
pub mod system;
pub mod temperature;

pub use error::{Result, ThermoError};
pub use reading::{HistoryStore, Reading};
pub use system::{SystemState, DEFAULT_TARGET_TEMPERATURE};
