//! Simulator binary for the Trapa natans ecological model.
//!
//! Wires configuration, logging, the simulation controller, and the HTTP
//! front end together.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `trapa-config.yaml` (or `TRAPA_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build a controller at the initial parameters and log its frame
//! 4. Serve the page and calculation API until terminated

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use trapa_core::{SimulationController, SimulatorConfig, TracingSink};
use trapa_observer::{AppState, ServerConfig};

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "trapa-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = config_path();
    let config = load_config(&config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("trapa-engine starting");
    info!(
        path = %config_path.display(),
        found = config_path.exists(),
        host = %config.observer.host,
        port = config.observer.port,
        particle_seed = ?config.simulation.particle_seed,
        "Configuration loaded"
    );

    // 3. Build the startup controller.
    let mut controller = SimulationController::from_config(&config.simulation);
    controller.subscribe(Box::new(TracingSink));
    let frame = controller.refresh();
    info!(
        season = %frame.parameters.season,
        coverage = frame.parameters.coverage_percent,
        dissolved_oxygen = frame.indicators.dissolved_oxygen_mg_per_l,
        narrative = %frame.narrative,
        "Initial state computed"
    );

    // 4. Serve.
    let state = Arc::new(AppState::new(config.simulation.clone())?);
    let server_config = ServerConfig::from(&config.observer);
    trapa_observer::start_server(&server_config, state).await?;

    info!("trapa-engine stopped");
    Ok(())
}

/// Path of the configuration file: `TRAPA_CONFIG` if set, otherwise
/// `trapa-config.yaml` in the working directory.
fn config_path() -> PathBuf {
    std::env::var_os("TRAPA_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

/// Load the simulator configuration, falling back to defaults when the
/// file does not exist. Observer env overrides apply in both cases.
fn load_config(path: &Path) -> Result<SimulatorConfig, EngineError> {
    if path.exists() {
        Ok(SimulatorConfig::from_file(path)?)
    } else {
        let mut config = SimulatorConfig::default();
        config.observer.apply_env_overrides();
        Ok(config)
    }
}
