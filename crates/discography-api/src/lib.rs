//! Discography API — HTTP adapter over the catalog services.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod validation;

use crate::state::AppState;

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/performers", routes::performers::router())
        .nest("/api/v1/releases", routes::releases::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
