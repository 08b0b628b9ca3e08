//! Shared application state for the HTTP layer.
//!
//! [`AppState`] holds configuration only. Every request builds its own
//! [`SimulationController`], so concurrent visitors never share or race on
//! parameter state.

use trapa_core::SimulationController;
use trapa_core::config::SimulationConfig;
use trapa_types::ControlParameters;

use crate::error::ObserverError;
use crate::page::PageRenderer;

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// Initial parameters and particle seeding for new controllers.
    pub simulation: SimulationConfig,
    /// Compiled page templates.
    pub pages: PageRenderer,
}

impl AppState {
    /// Create the application state, compiling the page templates.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Template`] if a template fails to parse.
    pub fn new(simulation: SimulationConfig) -> Result<Self, ObserverError> {
        Ok(Self {
            simulation,
            pages: PageRenderer::new()?,
        })
    }

    /// A fresh controller at the configured initial parameters.
    pub fn controller(&self) -> SimulationController {
        SimulationController::from_config(&self.simulation)
    }

    /// A fresh controller at `base`, clamped, using the configured seeding.
    pub fn controller_at(&self, base: ControlParameters) -> SimulationController {
        SimulationController::from_config(&SimulationConfig {
            initial: base,
            particle_seed: self.simulation.particle_seed,
        })
    }
}
