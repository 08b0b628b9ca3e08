//! Shared type definitions for the Trapa natans ecological simulator.
//!
//! This crate is the single source of truth for values passed between the
//! ecological model, the simulation controller, and the rendering layer.
//! Types flow downstream to `TypeScript` via `ts-rs` for the browser view.
//!
//! # Modules
//!
//! - [`enums`] -- Seasons, indicator kinds, particle bands, narrative clauses
//! - [`structs`] -- Control parameters, indicator vector, presentation values,
//!   and the published [`SimulationFrame`]
//! - [`events`] -- [`ControlEvent`] messages from the control panel

pub mod enums;
pub mod events;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    CoverageBand, IndicatorKind, MixingRegime, NarrativeClause, ParticleBand, Season,
    TrophicState, UnknownSeason,
};
pub use events::ControlEvent;
pub use structs::{
    ControlLabels, ControlParameters, IndicatorBar, IndicatorVector, Narrative,
    NarrativeFragment, Particle, ParticleField, Rgb, SimulationFrame, VisualLayer,
};
