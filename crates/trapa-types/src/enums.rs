//! Enumeration types for the Trapa natans simulator.
//!
//! Every set here is closed and fixed: seasons, the eight ecological
//! indicators, particle colour bands, the narrative clause kinds, and the
//! trophic and mixing interpretations of the level controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

/// A season selectable from the control panel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// Cool water, moderate light, slowed decomposition.
    Spring,
    /// Warm water, full light, the default season.
    #[default]
    Summer,
    /// Cool water with a decomposition peak; mats die back.
    Fall,
    /// Cold water, low light, decomposition mostly halted.
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Lowercase name used on the wire and in the control panel.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A season name that does not match any [`Season`] variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown season: {0:?}")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    /// Parse a season name, case-insensitively. `autumn` is accepted as an
    /// alias for [`Season::Fall`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(UnknownSeason(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// One of the eight derived ecological indicators, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum IndicatorKind {
    /// Light penetration through the water column (%).
    WaterClarity,
    /// Oxygenation of the sediment surface (%).
    SedimentOxygen,
    /// Likelihood of thermal stratification (%).
    StratificationRisk,
    /// Dissolved oxygen concentration (mg/L).
    DissolvedOxygen,
    /// Bioavailable nutrient index (0-10).
    NutrientAvailability,
    /// Organic matter decomposition rate index (0-10).
    DecompositionRate,
    /// Microbial biomass relative to capacity (%).
    MicrobialBiomass,
    /// Microbial community diversity (%).
    MicrobialDiversity,
}

impl IndicatorKind {
    /// All indicators in display order.
    pub const ALL: [Self; 8] = [
        Self::WaterClarity,
        Self::SedimentOxygen,
        Self::StratificationRisk,
        Self::DissolvedOxygen,
        Self::NutrientAvailability,
        Self::DecompositionRate,
        Self::MicrobialBiomass,
        Self::MicrobialDiversity,
    ];

    /// Upper bound of the indicator's closed domain. The lower bound is
    /// always zero.
    pub const fn upper_bound(self) -> f64 {
        match self {
            Self::DissolvedOxygen => 15.0,
            Self::NutrientAvailability | Self::DecompositionRate => 10.0,
            Self::WaterClarity
            | Self::SedimentOxygen
            | Self::StratificationRisk
            | Self::MicrobialBiomass
            | Self::MicrobialDiversity => 100.0,
        }
    }

    /// Human-readable name shown next to the indicator bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WaterClarity => "Water Clarity",
            Self::SedimentOxygen => "Sediment Oxygen",
            Self::StratificationRisk => "Stratification Risk",
            Self::DissolvedOxygen => "Dissolved Oxygen",
            Self::NutrientAvailability => "Nutrient Availability",
            Self::DecompositionRate => "Decomposition Rate",
            Self::MicrobialBiomass => "Microbial Biomass",
            Self::MicrobialDiversity => "Microbial Diversity",
        }
    }

    /// Unit suffix appended to the formatted value.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::DissolvedOxygen => " mg/L",
            Self::NutrientAvailability | Self::DecompositionRate => "",
            Self::WaterClarity
            | Self::SedimentOxygen
            | Self::StratificationRisk
            | Self::MicrobialBiomass
            | Self::MicrobialDiversity => "%",
        }
    }
}

// ---------------------------------------------------------------------------
// Particles
// ---------------------------------------------------------------------------

/// Colour band of the microbe particles, chosen by dissolved oxygen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ParticleBand {
    /// Band A: well-oxygenated water, aerobic community (DO above 6 mg/L).
    Aerobic,
    /// Band B: declining oxygen, mixed community (DO above 3 up to 6 mg/L).
    Transitional,
    /// Band C: hypoxic water, anaerobic community (DO at or below 3 mg/L).
    Anaerobic,
}

impl ParticleBand {
    /// CSS class the rendering layer applies to each particle.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Aerobic => "bg-blue-400",
            Self::Transitional => "bg-yellow-400",
            Self::Anaerobic => "bg-red-400",
        }
    }
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// Coverage band selecting the lead paragraph of the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CoverageBand {
    /// Coverage at or below 30%.
    Low,
    /// Coverage above 30% up to 70%.
    Moderate,
    /// Coverage above 70%.
    High,
}

/// Trophic state implied by the nutrient level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TrophicState {
    /// Levels 1-3: limited productivity.
    Oligotrophic,
    /// Levels 4-6: moderate productivity.
    Mesotrophic,
    /// Levels 7-10: high productivity potential.
    Eutrophic,
}

/// Mixing regime implied by the water movement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MixingRegime {
    /// Levels 1-3: limited mixing, stratification possible.
    Calm,
    /// Levels 4-6: adequate oxygen exchange.
    Moderate,
    /// Levels 7-10: strong mixing.
    Rapid,
}

/// The kind of a narrative fragment. Fragments always appear in the order
/// of this enum's variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "band")]
#[ts(export, export_to = "bindings/")]
pub enum NarrativeClause {
    /// Lead paragraph describing the current coverage band.
    Coverage(CoverageBand),
    /// Autumn decomposition of a dense mat.
    FallDieOff,
    /// Dissolved oxygen below the hypoxia threshold.
    Hypoxia,
    /// High stratification risk.
    Stratification,
    /// Interpretation of the nutrient level.
    TrophicState(TrophicState),
    /// Interpretation of the water movement level.
    MixingRegime(MixingRegime),
    /// Interpretation of the current season's phase.
    SeasonalPhase(Season),
}
