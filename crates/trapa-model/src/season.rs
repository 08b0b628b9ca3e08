//! Seasonal constants for the ecological model.
//!
//! | Season | Temp (C) | Light (%) | Decomposition x |
//! |--------|----------|-----------|-----------------|
//! | Spring | 15       | 70        | 0.8             |
//! | Summer | 25       | 100       | 1.2             |
//! | Fall   | 15       | 50        | 1.5             |
//! | Winter | 5        | 30        | 0.5             |
//!
//! Temperature shifts dissolved oxygen relative to a 15 C reference and the
//! multiplier scales the baseline decomposition rate. Light is carried in
//! the table but no indicator reads it yet.

use serde::Serialize;
use trapa_types::Season;

/// Reference temperature at which season has no effect on dissolved oxygen.
pub const REFERENCE_TEMPERATURE_C: f64 = 15.0;

/// Fixed per-season constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonProfile {
    /// The season this row describes.
    pub season: Season,
    /// Typical water temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative surface light in percent.
    pub light_percent: f64,
    /// Multiplier applied to the baseline decomposition rate.
    pub decomposition_multiplier: f64,
}

impl SeasonProfile {
    /// Return the constants for the given season.
    pub const fn for_season(season: Season) -> Self {
        let (temperature_c, light_percent, decomposition_multiplier) = match season {
            Season::Spring => (15.0, 70.0, 0.8),
            Season::Summer => (25.0, 100.0, 1.2),
            Season::Fall => (15.0, 50.0, 1.5),
            Season::Winter => (5.0, 30.0, 0.5),
        };
        Self {
            season,
            temperature_c,
            light_percent,
            decomposition_multiplier,
        }
    }

    /// The full table in calendar order.
    pub fn table() -> [Self; 4] {
        Season::ALL.map(Self::for_season)
    }

    /// Degrees above the reference temperature (negative when colder).
    pub const fn temperature_anomaly(&self) -> f64 {
        self.temperature_c - REFERENCE_TEMPERATURE_C
    }
}
