use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thermoloop_core::ThermoError;

/// Unified error type for HTTP responses.
///
/// Only the setpoint mutation can actually surface an error to a caller;
/// the state endpoint degrades instead of failing.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<ThermoError>() {
            match e {
                ThermoError::MissingField(_)
                | ThermoError::InvalidTemperature(_)
                | ThermoError::NonFinite(_) => StatusCode::BAD_REQUEST,
                ThermoError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
