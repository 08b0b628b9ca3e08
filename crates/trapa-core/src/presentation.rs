//! Presentation values derived from parameters and indicators.
//!
//! Everything here is a pure function of the current `ControlParameters`
//! and `IndicatorVector`. Renderers receive the results inside the
//! `SimulationFrame` and never recompute them.

use trapa_types::{
    ControlLabels, ControlParameters, IndicatorBar, IndicatorKind, IndicatorVector, Rgb,
    VisualLayer,
};

/// Bar scale applied to dissolved oxygen so 15 mg/L fills the track.
pub const DISSOLVED_OXYGEN_BAR_SCALE: f64 = 6.67;

/// Mat height in pixels at 100 % coverage.
const MAX_MAT_HEIGHT_PX: f64 = 40.0;

/// Names for nutrient levels 1 through 10.
pub const NUTRIENT_LABELS: [&str; 10] = [
    "Very Low",
    "Low",
    "Low-Medium",
    "Medium",
    "Medium",
    "Medium-High",
    "High",
    "High",
    "Very High",
    "Very High",
];

/// Names for water movement levels 1 through 10.
pub const MOVEMENT_LABELS: [&str; 10] = [
    "Still",
    "Very Still",
    "Slow",
    "Slow",
    "Moderate",
    "Moderate",
    "Moderate",
    "Flowing",
    "Flowing",
    "Fast",
];

/// Indicator bars in display order.
pub fn indicator_bars(indicators: &IndicatorVector) -> Vec<IndicatorBar> {
    IndicatorKind::ALL
        .iter()
        .map(|&kind| {
            let value = indicators.get(kind);
            let scale = if kind == IndicatorKind::DissolvedOxygen {
                DISSOLVED_OXYGEN_BAR_SCALE
            } else {
                1.0
            };
            IndicatorBar {
                kind,
                value,
                fill_percent: (value * scale).clamp(0.0, 100.0),
                display: format!("{value:.1}{}", kind.suffix()),
            }
        })
        .collect()
}

/// Styling of the cross-section drawing.
pub fn visual_layer(params: &ControlParameters, indicators: &IndicatorVector) -> VisualLayer {
    let coverage = params.coverage_percent;
    let clarity = indicators.water_clarity_percent;
    let nutrients = f64::from(params.nutrient_level);

    let water_opacity =
        (1.0 - (params.water_depth_m - ControlParameters::MIN_WATER_DEPTH_M) / 4.5).max(0.3);
    let blue = (255.0 - (100.0 - clarity) * 2.0 - nutrients * 5.0).max(100.0);
    let green = (200.0 - (100.0 - clarity) * 1.5 - nutrients * 3.0).max(50.0);
    let vegetation_density = (clarity * 0.8 + nutrients * 2.0 - coverage * 0.5).max(0.0);

    VisualLayer {
        mat_height_px: coverage / 100.0 * MAX_MAT_HEIGHT_PX,
        water_opacity,
        water_top: Rgb {
            r: blue - 50.0,
            g: green,
            b: blue,
        },
        water_bottom: Rgb {
            r: blue - 100.0,
            g: green - 50.0,
            b: blue,
        },
        bottom_vegetation_opacity: (vegetation_density / 100.0).min(0.8),
        bottom_vegetation_height_px: 20.0 + nutrients * 3.0,
    }
}

/// Name for a nutrient level; out-of-range levels saturate.
pub fn nutrient_label(level: u8) -> &'static str {
    level_label(&NUTRIENT_LABELS, level)
}

/// Name for a water movement level; out-of-range levels saturate.
pub fn movement_label(level: u8) -> &'static str {
    level_label(&MOVEMENT_LABELS, level)
}

fn level_label(labels: &[&'static str; 10], level: u8) -> &'static str {
    let index = usize::from(level.clamp(ControlParameters::MIN_LEVEL, ControlParameters::MAX_LEVEL))
        .saturating_sub(1);
    labels.get(index).copied().unwrap_or_default()
}

/// Text shown next to each control.
pub fn control_labels(params: &ControlParameters) -> ControlLabels {
    ControlLabels {
        water_depth: format!("{:.1}m", params.water_depth_m),
        coverage: format!("{}%", params.coverage_percent),
        nutrient_level: nutrient_label(params.nutrient_level).to_owned(),
        water_movement: movement_label(params.water_movement).to_owned(),
        season: params.season.as_str().to_owned(),
    }
}
