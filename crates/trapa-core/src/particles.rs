//! Microbe particle field derivation.
//!
//! The particle field is a visual density cue, not an indicator: one
//! particle per 5 % of microbial biomass, all tinted by the dissolved
//! oxygen band. Positions are random on every refresh.

use rand::Rng;
use trapa_types::{IndicatorVector, Particle, ParticleBand, ParticleField};

/// Biomass percentage represented by a single particle.
pub const BIOMASS_PER_PARTICLE: f64 = 5.0;

/// Dissolved oxygen (mg/L) above which particles are in the aerobic band.
pub const AEROBIC_ABOVE_MG_PER_L: f64 = 6.0;

/// Dissolved oxygen (mg/L) above which particles are at least transitional.
pub const TRANSITIONAL_ABOVE_MG_PER_L: f64 = 3.0;

/// Longest float animation delay in seconds (exclusive).
const MAX_ANIMATION_DELAY_S: f64 = 2.0;

/// Number of particles for the given biomass: `floor(biomass / 5)`.
///
/// Negative or `NaN` biomass yields zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(biomass_percent: f64) -> usize {
    let count = (biomass_percent / BIOMASS_PER_PARTICLE).floor();
    if count.is_nan() || count <= 0.0 {
        0
    } else {
        // Biomass is clamped to [0, 100], so the count is at most 20.
        count as usize
    }
}

/// Colour band for the given dissolved oxygen concentration.
pub const fn band_for(dissolved_oxygen_mg_per_l: f64) -> ParticleBand {
    if dissolved_oxygen_mg_per_l > AEROBIC_ABOVE_MG_PER_L {
        ParticleBand::Aerobic
    } else if dissolved_oxygen_mg_per_l > TRANSITIONAL_ABOVE_MG_PER_L {
        ParticleBand::Transitional
    } else {
        ParticleBand::Anaerobic
    }
}

/// Scatter a fresh particle field for the given indicators.
pub fn scatter<R: Rng>(indicators: &IndicatorVector, rng: &mut R) -> ParticleField {
    let count = particle_count(indicators.microbial_biomass_percent);
    let particles = (0..count)
        .map(|_| Particle {
            x_percent: rng.random_range(0.0..100.0),
            y_percent: rng.random_range(0.0..100.0),
            animation_delay_s: rng.random_range(0.0..MAX_ANIMATION_DELAY_S),
        })
        .collect();

    ParticleField {
        band: band_for(indicators.dissolved_oxygen_mg_per_l),
        particles,
    }
}
