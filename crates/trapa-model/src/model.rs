//! The ecological state model.
//!
//! [`compute`] maps a [`ControlParameters`] vector to an [`IndicatorVector`].
//! It is pure and total: identical inputs always produce bit-identical
//! outputs and nothing is carried between calls.
//!
//! # Derivation
//!
//! The indicators are accumulated on unclamped intermediates in a fixed
//! order, because later terms read earlier intermediate values:
//!
//! 1. Baseline seeds.
//! 2. Coverage: shading lowers clarity, oxygen, and sediment oxygen, and
//!    raises stratification.
//! 3. Season: temperature shifts dissolved oxygen, the seasonal multiplier
//!    scales decomposition.
//! 4. Depth: deeper water is darker and stratifies more readily.
//! 5. Movement: mixing aerates and breaks up stratification.
//! 6. Nutrients: loading feeds biomass and decomposition.
//! 7. Fall die-off: a dense mat rotting in autumn releases nutrients.
//! 8. Hypoxia feedback: below 5 mg/L, diversity drops and anaerobic
//!    biomass grows. Evaluated on the pre-clamp oxygen value.
//! 9. Clamp every indicator to its domain.

use trapa_types::{ControlParameters, IndicatorKind, IndicatorVector, Season};

use crate::season::SeasonProfile;

/// Dissolved oxygen (mg/L) below which the hypoxia feedback applies.
pub const HYPOXIA_THRESHOLD_MG_PER_L: f64 = 5.0;

/// Coverage (%) above which an autumn mat dies off.
pub const DIE_OFF_COVERAGE_PERCENT: f64 = 50.0;

/// Depth (m) at which depth has no effect.
const REFERENCE_DEPTH_M: f64 = 2.0;

/// Nutrient level at which nutrients have no effect.
const REFERENCE_NUTRIENT_LEVEL: f64 = 5.0;

/// A model mapping control parameters to indicators.
///
/// The controller holds the model behind this trait so tests can observe
/// or replace it. [`EcologicalStateModel`] is the production implementation.
pub trait IndicatorModel: Send {
    /// Derive the indicator vector for the given parameters.
    fn compute(&self, params: &ControlParameters) -> IndicatorVector;
}

/// The stateless Trapa natans ecological model.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcologicalStateModel;

impl EcologicalStateModel {
    /// Create the model.
    pub const fn new() -> Self {
        Self
    }
}

impl IndicatorModel for EcologicalStateModel {
    fn compute(&self, params: &ControlParameters) -> IndicatorVector {
        compute(params)
    }
}

/// Unclamped accumulators for the eight indicators.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    clarity: f64,
    sediment_oxygen: f64,
    stratification: f64,
    dissolved_oxygen: f64,
    nutrient_availability: f64,
    decomposition: f64,
    biomass: f64,
    diversity: f64,
}

impl Accumulator {
    const fn seed(nutrient_level: f64) -> Self {
        Self {
            clarity: 80.0,
            sediment_oxygen: 70.0,
            stratification: 20.0,
            dissolved_oxygen: 8.5,
            nutrient_availability: nutrient_level,
            decomposition: 3.0,
            biomass: 60.0,
            diversity: 75.0,
        }
    }

    fn clamp(self) -> IndicatorVector {
        let bound = |value: f64, kind: IndicatorKind| value.clamp(0.0, kind.upper_bound());
        IndicatorVector {
            water_clarity_percent: bound(self.clarity, IndicatorKind::WaterClarity),
            sediment_oxygen_percent: bound(self.sediment_oxygen, IndicatorKind::SedimentOxygen),
            stratification_risk_percent: bound(
                self.stratification,
                IndicatorKind::StratificationRisk,
            ),
            dissolved_oxygen_mg_per_l: bound(self.dissolved_oxygen, IndicatorKind::DissolvedOxygen),
            nutrient_availability: bound(
                self.nutrient_availability,
                IndicatorKind::NutrientAvailability,
            ),
            decomposition_rate: bound(self.decomposition, IndicatorKind::DecompositionRate),
            microbial_biomass_percent: bound(self.biomass, IndicatorKind::MicrobialBiomass),
            microbial_diversity_percent: bound(self.diversity, IndicatorKind::MicrobialDiversity),
        }
    }
}

/// Derive the indicator vector for the given parameters.
///
/// Callers are expected to pass parameters already clamped to their
/// domains; the result is still clamped to each indicator's domain.
pub fn compute(params: &ControlParameters) -> IndicatorVector {
    let coverage = params.coverage_percent;
    let depth = params.water_depth_m;
    let movement = f64::from(params.water_movement);
    let nutrients = f64::from(params.nutrient_level);

    let mut acc = Accumulator::seed(nutrients);

    // Coverage
    acc.clarity -= coverage * 0.6;
    acc.dissolved_oxygen -= coverage * 0.05;
    acc.sediment_oxygen -= coverage * 0.4;
    acc.stratification += coverage * 0.3;

    // Season
    let profile = SeasonProfile::for_season(params.season);
    acc.dissolved_oxygen -= profile.temperature_anomaly() * 0.1;
    acc.decomposition *= profile.decomposition_multiplier;

    // Depth
    acc.clarity -= (depth - REFERENCE_DEPTH_M) * 5.0;
    acc.stratification += (depth - REFERENCE_DEPTH_M) * 10.0;

    // Movement
    acc.dissolved_oxygen += movement * 0.2;
    acc.stratification -= movement * 5.0;

    // Nutrients
    acc.biomass += (nutrients - REFERENCE_NUTRIENT_LEVEL) * 5.0;
    acc.decomposition += (nutrients - REFERENCE_NUTRIENT_LEVEL) * 0.5;

    let die_off = params.season == Season::Fall && coverage > DIE_OFF_COVERAGE_PERCENT;
    if die_off {
        acc.nutrient_availability += coverage * 0.1;
        acc.decomposition += coverage * 0.05;
    }

    let hypoxic = acc.dissolved_oxygen < HYPOXIA_THRESHOLD_MG_PER_L;
    if hypoxic {
        let deficit = HYPOXIA_THRESHOLD_MG_PER_L - acc.dissolved_oxygen;
        acc.diversity -= deficit * 5.0;
        acc.biomass += deficit * 3.0;
    }

    tracing::trace!(
        dissolved_oxygen_raw = acc.dissolved_oxygen,
        die_off,
        hypoxic,
        "indicators derived"
    );

    acc.clamp()
}
