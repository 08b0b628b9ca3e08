//! Axum router construction for the simulator.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin access to the calculation API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- the interactive simulation page
/// - `GET /api/defaults` -- frame at the configured initial parameters
/// - `POST /api/calculate` -- frame after applying control events
/// - `GET /api/seasons` -- the seasonal effect table
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/defaults", get(handlers::get_defaults))
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/seasons", get(handlers::get_seasons))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
