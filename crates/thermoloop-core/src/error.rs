use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThermoError {
    #[error("missing field '{0}' in request body")]
    MissingField(&'static str),

    #[error("invalid temperature '{0}': expected a number")]
    InvalidTemperature(String),

    #[error("temperature must be finite, got {0}")]
    NonFinite(f64),

    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ThermoError>;
