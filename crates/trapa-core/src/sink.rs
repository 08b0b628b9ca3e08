//! View collaborators that receive every published frame.

use tracing::debug;
use trapa_types::SimulationFrame;

/// Receiver of simulation frames.
///
/// The controller calls [`ViewSink::publish`] once per refresh, in
/// registration order, after the frame is fully derived.
pub trait ViewSink: Send {
    /// Called with the frame produced by a refresh.
    fn publish(&mut self, frame: &SimulationFrame);
}

/// A sink that logs headline indicators at `debug` level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ViewSink for TracingSink {
    fn publish(&mut self, frame: &SimulationFrame) {
        let indicators = &frame.indicators;
        debug!(
            season = %frame.parameters.season,
            coverage = frame.parameters.coverage_percent,
            dissolved_oxygen = indicators.dissolved_oxygen_mg_per_l,
            stratification = indicators.stratification_risk_percent,
            biomass = indicators.microbial_biomass_percent,
            particles = frame.particles.len(),
            narrative_clauses = frame.narrative.fragments.len(),
            "Frame published"
        );
    }
}
