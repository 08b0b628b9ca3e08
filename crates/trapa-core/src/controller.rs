//! The simulation controller.
//!
//! [`SimulationController`] owns the live [`ControlParameters`], the most
//! recent [`SimulationFrame`], the particle RNG, and the registered view
//! sinks. Every mutation follows the same cycle:
//!
//! 1. Clamp the incoming value and write exactly one parameter field.
//! 2. Recompute the indicators through the [`IndicatorModel`].
//! 3. Derive the presentation values (bars, visual layer, labels,
//!    narrative, particles) into a new frame.
//! 4. Publish the frame to every sink in registration order.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;
use trapa_model::{EcologicalStateModel, IndicatorModel};
use trapa_types::{
    ControlEvent, ControlParameters, IndicatorVector, Season, SimulationFrame, UnknownSeason,
};

use crate::config::SimulationConfig;
use crate::sink::ViewSink;
use crate::{narrative, particles, presentation};

/// Owns the live parameter state and drives the update pipeline.
pub struct SimulationController {
    params: ControlParameters,
    frame: SimulationFrame,
    model: Box<dyn IndicatorModel>,
    rng: SmallRng,
    sinks: Vec<Box<dyn ViewSink>>,
}

impl SimulationController {
    /// Create a controller at the default parameters with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_parameters(ControlParameters::default(), SmallRng::from_os_rng())
    }

    /// Create a controller at the given parameters (clamped) using `rng`
    /// for particle placement.
    pub fn with_parameters(params: ControlParameters, rng: SmallRng) -> Self {
        Self::with_model(params, rng, Box::new(EcologicalStateModel::new()))
    }

    /// Create a controller whose particle placement is reproducible.
    pub fn seeded(params: ControlParameters, seed: u64) -> Self {
        Self::with_parameters(params, SmallRng::seed_from_u64(seed))
    }

    /// Create a controller from the `simulation` config section.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = config
            .particle_seed
            .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
        Self::with_parameters(config.initial, rng)
    }

    /// Create a controller backed by an arbitrary indicator model.
    ///
    /// The initial frame is computed immediately. No sinks are registered
    /// yet, so nothing is published.
    pub fn with_model(
        params: ControlParameters,
        mut rng: SmallRng,
        model: Box<dyn IndicatorModel>,
    ) -> Self {
        let params = params.clamped();
        let frame = derive_frame(model.as_ref(), &params, &mut rng);
        Self {
            params,
            frame,
            model,
            rng,
            sinks: Vec::new(),
        }
    }

    /// Register a view collaborator. It receives every subsequent frame.
    pub fn subscribe(&mut self, sink: Box<dyn ViewSink>) {
        self.sinks.push(sink);
    }

    /// Set the water depth in metres, clamped to [0.5, 5.0].
    pub fn set_water_depth(&mut self, value: f64) -> &SimulationFrame {
        self.params.water_depth_m = ControlParameters::clamp_water_depth(value);
        debug!(requested = value, stored = self.params.water_depth_m, "Water depth set");
        self.refresh()
    }

    /// Set the surface coverage percentage, clamped to [0, 100].
    pub fn set_coverage(&mut self, value: f64) -> &SimulationFrame {
        self.params.coverage_percent = ControlParameters::clamp_coverage(value);
        debug!(requested = value, stored = self.params.coverage_percent, "Coverage set");
        self.refresh()
    }

    /// Set the nutrient level, saturated to [1, 10].
    pub fn set_nutrient_level(&mut self, value: i64) -> &SimulationFrame {
        self.params.nutrient_level = ControlParameters::clamp_level(value);
        debug!(requested = value, stored = self.params.nutrient_level, "Nutrient level set");
        self.refresh()
    }

    /// Set the water movement level, saturated to [1, 10].
    pub fn set_water_movement(&mut self, value: i64) -> &SimulationFrame {
        self.params.water_movement = ControlParameters::clamp_level(value);
        debug!(requested = value, stored = self.params.water_movement, "Water movement set");
        self.refresh()
    }

    /// Set the season.
    pub fn set_season(&mut self, season: Season) -> &SimulationFrame {
        self.params.season = season;
        debug!(%season, "Season set");
        self.refresh()
    }

    /// Set the season from its textual name.
    ///
    /// Unknown names are rejected and leave the state untouched.
    pub fn set_season_named(&mut self, name: &str) -> Result<(), UnknownSeason> {
        let season = name.parse::<Season>()?;
        self.set_season(season);
        Ok(())
    }

    /// Dispatch a control event to the matching setter.
    pub fn apply(&mut self, event: ControlEvent) -> &SimulationFrame {
        match event {
            ControlEvent::WaterDepth(value) => self.set_water_depth(value),
            ControlEvent::Coverage(value) => self.set_coverage(value),
            ControlEvent::NutrientLevel(value) => self.set_nutrient_level(value),
            ControlEvent::WaterMovement(value) => self.set_water_movement(value),
            ControlEvent::Season(season) => self.set_season(season),
        }
    }

    /// Recompute the frame from the current parameters and publish it.
    pub fn refresh(&mut self) -> &SimulationFrame {
        self.frame = derive_frame(self.model.as_ref(), &self.params, &mut self.rng);
        for sink in &mut self.sinks {
            sink.publish(&self.frame);
        }
        &self.frame
    }

    /// Current parameters.
    pub const fn parameters(&self) -> &ControlParameters {
        &self.params
    }

    /// Indicators of the most recent frame.
    pub const fn indicators(&self) -> &IndicatorVector {
        &self.frame.indicators
    }

    /// The most recent frame.
    pub const fn frame(&self) -> &SimulationFrame {
        &self.frame
    }

    /// Consume the controller, keeping only the most recent frame.
    pub fn into_frame(self) -> SimulationFrame {
        self.frame
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimulationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationController")
            .field("params", &self.params)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}

fn derive_frame(
    model: &dyn IndicatorModel,
    params: &ControlParameters,
    rng: &mut SmallRng,
) -> SimulationFrame {
    let indicators = model.compute(params);
    SimulationFrame {
        parameters: *params,
        bars: presentation::indicator_bars(&indicators),
        visual: presentation::visual_layer(params, &indicators),
        labels: presentation::control_labels(params),
        narrative: narrative::compose(params, &indicators),
        particles: particles::scatter(&indicators, rng),
        indicators,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use trapa_types::{CoverageBand, NarrativeClause, ParticleBand};

    use super::*;

    /// Records every published frame.
    struct RecordingSink(Arc<Mutex<Vec<SimulationFrame>>>);

    impl ViewSink for RecordingSink {
        fn publish(&mut self, frame: &SimulationFrame) {
            self.0.lock().unwrap().push(frame.clone());
        }
    }

    /// Records the order in which sinks are called.
    struct TaggedSink(&'static str, Arc<Mutex<Vec<&'static str>>>);

    impl ViewSink for TaggedSink {
        fn publish(&mut self, _frame: &SimulationFrame) {
            self.1.lock().unwrap().push(self.0);
        }
    }

    /// A model that ignores its input.
    struct FixedModel(IndicatorVector);

    impl IndicatorModel for FixedModel {
        fn compute(&self, _params: &ControlParameters) -> IndicatorVector {
            self.0
        }
    }

    fn controller() -> SimulationController {
        SimulationController::seeded(ControlParameters::default(), 42)
    }

    #[test]
    fn initial_frame_matches_defaults() {
        let c = controller();
        assert_eq!(*c.parameters(), ControlParameters::default());
        assert_eq!(*c.indicators(), trapa_model::compute(&ControlParameters::default()));
        assert_eq!(c.frame().particles.len(), 12);
        assert_eq!(c.frame().labels.nutrient_level, "Medium");
    }

    #[test]
    fn coverage_above_range_is_stored_as_maximum() {
        let mut c = controller();
        c.set_coverage(150.0);
        assert!((c.parameters().coverage_percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(
            c.frame().narrative.clauses().first().copied(),
            Some(NarrativeClause::Coverage(CoverageBand::High))
        );
    }

    #[test]
    fn non_finite_inputs_clamp() {
        let mut c = controller();
        c.set_water_depth(f64::INFINITY);
        assert!((c.parameters().water_depth_m - 5.0).abs() < f64::EPSILON);
        c.set_water_depth(f64::NAN);
        assert!((c.parameters().water_depth_m - 0.5).abs() < f64::EPSILON);
        c.set_coverage(f64::NEG_INFINITY);
        assert!(c.parameters().coverage_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn integer_setters_saturate() {
        let mut c = controller();
        c.set_nutrient_level(i64::MAX);
        assert_eq!(c.parameters().nutrient_level, 10);
        c.set_water_movement(-3);
        assert_eq!(c.parameters().water_movement, 1);
    }

    #[test]
    fn setters_touch_only_their_field() {
        let events = [
            ControlEvent::WaterDepth(4.2),
            ControlEvent::Coverage(65.0),
            ControlEvent::NutrientLevel(9),
            ControlEvent::WaterMovement(2),
            ControlEvent::Season(Season::Winter),
        ];
        for event in events {
            let mut c = controller();
            let before = *c.parameters();
            c.apply(event);
            let after = *c.parameters();

            // Put the targeted field back; everything else must be untouched.
            let restored = match event {
                ControlEvent::WaterDepth(value) => {
                    assert!((after.water_depth_m - value).abs() < f64::EPSILON);
                    ControlParameters {
                        water_depth_m: before.water_depth_m,
                        ..after
                    }
                }
                ControlEvent::Coverage(value) => {
                    assert!((after.coverage_percent - value).abs() < f64::EPSILON);
                    ControlParameters {
                        coverage_percent: before.coverage_percent,
                        ..after
                    }
                }
                ControlEvent::NutrientLevel(value) => {
                    assert_eq!(i64::from(after.nutrient_level), value);
                    ControlParameters {
                        nutrient_level: before.nutrient_level,
                        ..after
                    }
                }
                ControlEvent::WaterMovement(value) => {
                    assert_eq!(i64::from(after.water_movement), value);
                    ControlParameters {
                        water_movement: before.water_movement,
                        ..after
                    }
                }
                ControlEvent::Season(season) => {
                    assert_eq!(after.season, season);
                    ControlParameters {
                        season: before.season,
                        ..after
                    }
                }
            };
            assert_eq!(restored, before, "{event:?}");
            assert_ne!(after, before, "{event:?}");
        }
    }

    #[test]
    fn every_mutation_publishes_one_frame() {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let mut c = controller();
        c.subscribe(Box::new(RecordingSink(Arc::clone(&frames))));

        c.set_coverage(80.0);
        c.set_season(Season::Fall);
        c.apply(ControlEvent::WaterMovement(2));

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 3);
        let last = frames.last().unwrap();
        assert_eq!(last, c.frame());
        assert_eq!(last.parameters.season, Season::Fall);
        assert_eq!(last.parameters.water_movement, 2);
    }

    #[test]
    fn sinks_are_called_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut c = controller();
        c.subscribe(Box::new(TaggedSink("first", Arc::clone(&calls))));
        c.subscribe(Box::new(TaggedSink("second", Arc::clone(&calls))));
        c.refresh();
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn hypoxic_mat_reaches_the_frame() {
        let mut c = controller();
        c.apply(ControlEvent::Coverage(100.0));
        c.apply(ControlEvent::WaterMovement(1));

        let frame = c.frame();
        assert!((frame.indicators.dissolved_oxygen_mg_per_l - 2.7).abs() < 1e-9);
        assert_eq!(frame.particles.band, ParticleBand::Anaerobic);
        assert!(frame.narrative.contains(NarrativeClause::Hypoxia));
    }

    #[test]
    fn fall_die_off_reaches_the_frame() {
        let mut c = controller();
        c.set_coverage(80.0);
        c.set_nutrient_level(1);
        c.set_season(Season::Fall);

        let frame = c.frame();
        assert!((frame.indicators.nutrient_availability - 9.0).abs() < 1e-9);
        assert!((frame.indicators.decomposition_rate - 6.5).abs() < 1e-9);
        assert!(frame.narrative.contains(NarrativeClause::FallDieOff));
    }

    #[test]
    fn named_season_accepts_known_and_rejects_unknown() {
        let mut c = controller();
        assert!(c.set_season_named("Winter").is_ok());
        assert_eq!(c.parameters().season, Season::Winter);

        let err = c.set_season_named("monsoon");
        assert_eq!(err.unwrap_err(), UnknownSeason("monsoon".to_owned()));
        assert_eq!(c.parameters().season, Season::Winter);
    }

    #[test]
    fn same_seed_gives_identical_frames() {
        let mut a = controller();
        let mut b = controller();
        a.set_coverage(40.0);
        b.set_coverage(40.0);
        assert_eq!(a.frame(), b.frame());
    }

    #[test]
    fn custom_model_drives_the_frame() {
        let fixed = IndicatorVector {
            dissolved_oxygen_mg_per_l: 1.0,
            microbial_biomass_percent: 25.0,
            ..trapa_model::compute(&ControlParameters::default())
        };
        let c = SimulationController::with_model(
            ControlParameters::default(),
            SmallRng::seed_from_u64(1),
            Box::new(FixedModel(fixed)),
        );
        assert_eq!(*c.indicators(), fixed);
        assert_eq!(c.frame().particles.len(), 5);
        assert_eq!(c.frame().particles.band, ParticleBand::Anaerobic);
    }

    #[test]
    fn from_config_uses_initial_parameters_and_seed() {
        let config = SimulationConfig {
            initial: ControlParameters {
                season: Season::Spring,
                ..ControlParameters::default()
            },
            particle_seed: Some(9),
        };
        let a = SimulationController::from_config(&config);
        let b = SimulationController::from_config(&config);
        assert_eq!(a.parameters().season, Season::Spring);
        assert_eq!(a.frame(), b.frame());
    }
}
