//! Value structs exchanged between the model, the controller, and the
//! rendering collaborators.
//!
//! [`ControlParameters`] is the only mutable input; everything else is a
//! derived value recreated on each refresh and bundled into a
//! [`SimulationFrame`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::enums::{IndicatorKind, NarrativeClause, ParticleBand, Season};

// ---------------------------------------------------------------------------
// Control parameters
// ---------------------------------------------------------------------------

/// Environmental control parameters set from the control panel.
///
/// Missing fields deserialize to their startup defaults. Integer levels
/// outside `u8` are accepted and saturated to `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct ControlParameters {
    /// Water depth in metres, within [0.5, 5.0].
    pub water_depth_m: f64,
    /// Share of the surface covered by floating mats, within [0, 100].
    pub coverage_percent: f64,
    /// Nutrient loading level, within [1, 10].
    #[serde(deserialize_with = "deserialize_level")]
    pub nutrient_level: u8,
    /// Water movement level from still (1) to fast (10).
    #[serde(deserialize_with = "deserialize_level")]
    pub water_movement: u8,
    /// Current season.
    pub season: Season,
}

impl ControlParameters {
    /// Shallowest selectable depth in metres.
    pub const MIN_WATER_DEPTH_M: f64 = 0.5;
    /// Deepest selectable depth in metres.
    pub const MAX_WATER_DEPTH_M: f64 = 5.0;
    /// Lowest coverage percentage.
    pub const MIN_COVERAGE_PERCENT: f64 = 0.0;
    /// Highest coverage percentage.
    pub const MAX_COVERAGE_PERCENT: f64 = 100.0;
    /// Lowest nutrient or movement level.
    pub const MIN_LEVEL: u8 = 1;
    /// Highest nutrient or movement level.
    pub const MAX_LEVEL: u8 = 10;

    /// Clamp a depth to `[MIN_WATER_DEPTH_M, MAX_WATER_DEPTH_M]`.
    ///
    /// `NaN` maps to the lower bound.
    pub const fn clamp_water_depth(value: f64) -> f64 {
        clamp_real(value, Self::MIN_WATER_DEPTH_M, Self::MAX_WATER_DEPTH_M)
    }

    /// Clamp a coverage percentage to `[0, 100]`.
    ///
    /// `NaN` maps to the lower bound.
    pub const fn clamp_coverage(value: f64) -> f64 {
        clamp_real(value, Self::MIN_COVERAGE_PERCENT, Self::MAX_COVERAGE_PERCENT)
    }

    /// Saturate an integer level to `[MIN_LEVEL, MAX_LEVEL]`.
    pub fn clamp_level(value: i64) -> u8 {
        let bounded = value.clamp(i64::from(Self::MIN_LEVEL), i64::from(Self::MAX_LEVEL));
        u8::try_from(bounded).unwrap_or(Self::MIN_LEVEL)
    }

    /// Return a copy with every field clamped to its domain.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            water_depth_m: Self::clamp_water_depth(self.water_depth_m),
            coverage_percent: Self::clamp_coverage(self.coverage_percent),
            nutrient_level: Self::clamp_level(i64::from(self.nutrient_level)),
            water_movement: Self::clamp_level(i64::from(self.water_movement)),
            season: self.season,
        }
    }
}

impl Default for ControlParameters {
    /// Startup values: 2.0 m deep, no coverage, medium nutrients and
    /// movement, summer.
    fn default() -> Self {
        Self {
            water_depth_m: 2.0,
            coverage_percent: 0.0,
            nutrient_level: 5,
            water_movement: 5,
            season: Season::Summer,
        }
    }
}

const fn clamp_real(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}

fn deserialize_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    i64::deserialize(deserializer).map(ControlParameters::clamp_level)
}

// ---------------------------------------------------------------------------
// Indicator vector
// ---------------------------------------------------------------------------

/// Derived ecological indicators, each clamped to its closed domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct IndicatorVector {
    /// Light penetration, [0, 100] %.
    pub water_clarity_percent: f64,
    /// Sediment oxygenation, [0, 100] %.
    pub sediment_oxygen_percent: f64,
    /// Stratification risk, [0, 100] %.
    pub stratification_risk_percent: f64,
    /// Dissolved oxygen, [0, 15] mg/L.
    pub dissolved_oxygen_mg_per_l: f64,
    /// Nutrient availability index, [0, 10].
    pub nutrient_availability: f64,
    /// Decomposition rate index, [0, 10].
    pub decomposition_rate: f64,
    /// Microbial biomass, [0, 100] %.
    pub microbial_biomass_percent: f64,
    /// Microbial diversity, [0, 100] %.
    pub microbial_diversity_percent: f64,
}

impl IndicatorVector {
    /// Read one indicator by kind.
    pub const fn get(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::WaterClarity => self.water_clarity_percent,
            IndicatorKind::SedimentOxygen => self.sediment_oxygen_percent,
            IndicatorKind::StratificationRisk => self.stratification_risk_percent,
            IndicatorKind::DissolvedOxygen => self.dissolved_oxygen_mg_per_l,
            IndicatorKind::NutrientAvailability => self.nutrient_availability,
            IndicatorKind::DecompositionRate => self.decomposition_rate,
            IndicatorKind::MicrobialBiomass => self.microbial_biomass_percent,
            IndicatorKind::MicrobialDiversity => self.microbial_diversity_percent,
        }
    }
}

// ---------------------------------------------------------------------------
// Particle field
// ---------------------------------------------------------------------------

/// A single microbe particle drawn in the water column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Particle {
    /// Horizontal position, [0, 100) % of the container width.
    pub x_percent: f64,
    /// Vertical position, [0, 100) % of the container height.
    pub y_percent: f64,
    /// Float animation delay in seconds, [0, 2).
    pub animation_delay_s: f64,
}

/// The microbe particle field for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParticleField {
    /// Colour band shared by every particle.
    pub band: ParticleBand,
    /// Randomly placed particles; the count is `floor(biomass / 5)`.
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Number of particles in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// One horizontal indicator bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct IndicatorBar {
    /// Which indicator this bar shows.
    pub kind: IndicatorKind,
    /// Raw indicator value.
    pub value: f64,
    /// Bar width as a percentage of the track, [0, 100].
    pub fill_percent: f64,
    /// Formatted value, e.g. `"8.5 mg/L"`.
    pub display: String,
}

/// An RGB colour with fractional channels, as emitted into CSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// CSS `rgb()` function, channels rounded to integers.
    pub fn css(&self) -> String {
        format!("rgb({:.0}, {:.0}, {:.0})", self.r, self.g, self.b)
    }
}

/// Derived styling of the cross-section drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VisualLayer {
    /// Height of the floating mat in pixels.
    pub mat_height_px: f64,
    /// Opacity of the water column, [0.3, 1].
    pub water_opacity: f64,
    /// Colour at the top of the water gradient.
    pub water_top: Rgb,
    /// Colour at the bottom of the water gradient.
    pub water_bottom: Rgb,
    /// Opacity of the submerged bottom vegetation, at most 0.8.
    pub bottom_vegetation_opacity: f64,
    /// Height of the bottom vegetation in pixels.
    pub bottom_vegetation_height_px: f64,
}

impl VisualLayer {
    /// CSS `linear-gradient` for the water column background.
    pub fn water_gradient_css(&self) -> String {
        format!(
            "linear-gradient(to bottom, {}, {})",
            self.water_top.css(),
            self.water_bottom.css()
        )
    }
}

/// Text shown next to each control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ControlLabels {
    /// Depth, e.g. `"2.0m"`.
    pub water_depth: String,
    /// Coverage, e.g. `"45%"`.
    pub coverage: String,
    /// Nutrient level name, e.g. `"Medium"`.
    pub nutrient_level: String,
    /// Water movement name, e.g. `"Moderate"`.
    pub water_movement: String,
    /// Season name.
    pub season: String,
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// One paragraph of the educational narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NarrativeFragment {
    /// Which clause produced this paragraph.
    pub clause: NarrativeClause,
    /// Bold lead-in, if any.
    pub heading: Option<String>,
    /// Paragraph text with current indicator values interpolated.
    pub body: String,
}

/// The ordered educational narrative for one refresh.
///
/// `fragments` holds the condition paragraphs (coverage band and any
/// warnings). `interpretation` follows them and explains what the nutrient,
/// movement and season controls currently mean.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Narrative {
    /// Condition paragraphs in presentation order.
    pub fragments: Vec<NarrativeFragment>,
    /// Control interpretation paragraphs, shown after `fragments`.
    #[serde(default)]
    pub interpretation: Vec<NarrativeFragment>,
}

impl Narrative {
    /// Condition clause kinds in presentation order.
    pub fn clauses(&self) -> Vec<NarrativeClause> {
        self.fragments.iter().map(|f| f.clause).collect()
    }

    /// Interpretation clause kinds in presentation order.
    pub fn interpretation_clauses(&self) -> Vec<NarrativeClause> {
        self.interpretation.iter().map(|f| f.clause).collect()
    }

    /// Whether a clause of the given kind is present in either section.
    pub fn contains(&self, clause: NarrativeClause) -> bool {
        self.fragments
            .iter()
            .chain(&self.interpretation)
            .any(|f| f.clause == clause)
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fragment) in self.fragments.iter().chain(&self.interpretation).enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            if let Some(heading) = &fragment.heading {
                write!(f, "{heading}: ")?;
            }
            f.write_str(&fragment.body)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// Everything a refresh publishes to the rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationFrame {
    /// Parameters the frame was computed from.
    pub parameters: ControlParameters,
    /// Derived indicators.
    pub indicators: IndicatorVector,
    /// Indicator bars in display order.
    pub bars: Vec<IndicatorBar>,
    /// Cross-section styling.
    pub visual: VisualLayer,
    /// Control panel labels.
    pub labels: ControlLabels,
    /// Educational narrative.
    pub narrative: Narrative,
    /// Microbe particles.
    pub particles: ParticleField,
}
