//! `thermoloop-datastore` — the append-only reading history over HTTP.
//!
//! Single source of truth for historical temperature data. The store is
//! volatile by design: it lives in process memory and dies with the
//! process. In a real deployment this would sit in front of a time-series
//! database.

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router() -> Router {
    let app_state = state::AppState::new();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/data",
            get(routes::readings::list_readings).post(routes::readings::append_reading),
        )
        .layer(cors)
        .with_state(app_state)
}

/// Bind the given port on all interfaces and serve until terminated.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let app = build_router();

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("datastore listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
