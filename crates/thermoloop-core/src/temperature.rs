use crate::error::{Result, ThermoError};

/// Extract and coerce the `temperature` field from a JSON request body.
///
/// Accepts a JSON number or a numeric string; everything else is a
/// validation error. NaN and infinities are rejected, so a successful
/// result is always a finite value safe to store or set as a target.
pub fn parse_temperature(body: &serde_json::Value) -> Result<f64> {
    let value = body
        .get("temperature")
        .ok_or(ThermoError::MissingField("temperature"))?;

    let parsed = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ThermoError::InvalidTemperature(n.to_string()))?,
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ThermoError::InvalidTemperature(s.clone()))?,
        other => return Err(ThermoError::InvalidTemperature(other.to_string())),
    };

    if !parsed.is_finite() {
        return Err(ThermoError::NonFinite(parsed));
    }
    Ok(parsed)
}
