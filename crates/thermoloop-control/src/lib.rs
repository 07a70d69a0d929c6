//! `thermoloop-control` — setpoint authority and state aggregator.
//!
//! Owns the mutable target temperature and serves the combined system
//! state. The datastore dependency is non-critical: when it cannot be
//! reached the state endpoint degrades to a null current temperature
//! instead of failing.

pub mod datastore;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(datastore_url: impl Into<String>, initial_target: f64) -> Router {
    let app_state = state::AppState::new(datastore_url, initial_target);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/state", get(routes::state::get_state))
        .route("/setpoint", post(routes::setpoint::set_setpoint))
        .layer(cors)
        .with_state(app_state)
}

/// Bind the given port on all interfaces and serve until terminated.
pub async fn serve(port: u16, datastore_url: String, initial_target: f64) -> anyhow::Result<()> {
    let app = build_router(datastore_url, initial_target);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "control authority listening on http://{}, target {initial_target:.1}°C",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
