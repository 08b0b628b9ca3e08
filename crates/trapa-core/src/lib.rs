//! Simulation controller and presentation layer for the Trapa natans
//! simulator.
//!
//! The controller owns the live control parameters, runs the
//! [`EcologicalStateModel`] on every change, and derives everything a view
//! needs into a [`SimulationFrame`].
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `trapa-config.yaml` into
//!   strongly-typed structs.
//! - [`controller`] -- [`SimulationController`], the single owner of the
//!   parameter state.
//! - [`narrative`] -- Educational narrative clause selection.
//! - [`particles`] -- Microbe particle count, colour band, and placement.
//! - [`presentation`] -- Indicator bars, cross-section styling, and control
//!   labels.
//! - [`sink`] -- [`ViewSink`] trait and [`TracingSink`].
//!
//! [`EcologicalStateModel`]: trapa_model::EcologicalStateModel
//! [`SimulationFrame`]: trapa_types::SimulationFrame
//! [`SimulationController`]: controller::SimulationController
//! [`ViewSink`]: sink::ViewSink
//! [`TracingSink`]: sink::TracingSink

pub mod config;
pub mod controller;
pub mod narrative;
pub mod particles;
pub mod presentation;
pub mod sink;

pub use config::{ConfigError, SimulatorConfig};
pub use controller::SimulationController;
pub use sink::{TracingSink, ViewSink};
