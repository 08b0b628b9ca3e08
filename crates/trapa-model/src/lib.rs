//! Ecological state model for the Trapa natans simulator.
//!
//! A pure, stateless mapping from [`ControlParameters`] to
//! [`IndicatorVector`]. The model owns no state and may be shared freely.
//!
//! # Modules
//!
//! - [`model`] -- [`compute`], the [`IndicatorModel`] seam, and
//!   [`EcologicalStateModel`].
//! - [`season`] -- The fixed season lookup table ([`SeasonProfile`]).
//!
//! [`ControlParameters`]: trapa_types::ControlParameters
//! [`IndicatorVector`]: trapa_types::IndicatorVector

pub mod model;
pub mod season;

pub use model::{
    DIE_OFF_COVERAGE_PERCENT, EcologicalStateModel, HYPOXIA_THRESHOLD_MG_PER_L, IndicatorModel,
    compute,
};
pub use season::SeasonProfile;
