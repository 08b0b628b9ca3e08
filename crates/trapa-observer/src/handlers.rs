//! HTTP endpoint handlers.
//!
//! Handlers never share a controller: each request builds one from the
//! shared configuration, drives it, and returns the resulting frame.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Interactive simulation page |
//! | `GET` | `/api/defaults` | Frame at the configured initial parameters |
//! | `POST` | `/api/calculate` | Frame after applying control events |
//! | `GET` | `/api/seasons` | Seasonal effect table |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use serde::Deserialize;
use tracing::debug;
use trapa_model::SeasonProfile;
use trapa_types::{ControlEvent, ControlParameters, SimulationFrame};

use crate::error::ObserverError;
use crate::state::AppState;

/// Body of `POST /api/calculate`.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    /// Starting parameters. Defaults to the configured initial parameters.
    /// Out-of-range values are clamped.
    pub base: Option<ControlParameters>,
    /// Control events applied in order after the base is set.
    #[serde(default)]
    pub events: Vec<ControlEvent>,
}

/// Serve the interactive page rendered at the configured initial state.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ObserverError> {
    let controller = state.controller();
    let html = state.pages.render_index(controller.frame())?;
    Ok(Html(html))
}

/// Return the frame at the configured initial parameters.
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<SimulationFrame> {
    Json(state.controller().into_frame())
}

/// Compute a frame from a base parameter vector and a list of events.
///
/// An unknown season, a non-numeric value, or malformed JSON yields
/// `400 Bad Request` with a JSON error body.
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<SimulationFrame>, ObserverError> {
    let Json(request) = body?;

    let mut controller = match request.base {
        Some(base) => state.controller_at(base),
        None => state.controller(),
    };
    let event_count = request.events.len();
    for event in request.events {
        controller.apply(event);
    }

    debug!(
        events = event_count,
        dissolved_oxygen = controller.indicators().dissolved_oxygen_mg_per_l,
        "Calculated frame"
    );
    Ok(Json(controller.into_frame()))
}

/// Return the seasonal effect table in season order.
pub async fn get_seasons() -> Json<[SeasonProfile; 4]> {
    Json(SeasonProfile::table())
}
