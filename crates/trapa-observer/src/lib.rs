//! HTTP front end for the Trapa natans simulator.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Interactive page** (`GET /`) rendered with `minijinja` from the
//!   configured initial frame
//! - **Calculation API** (`POST /api/calculate`) that applies a list of
//!   control events to a base parameter vector and returns the frame
//! - **Reference endpoints** for the default frame and the season table
//!
//! # Architecture
//!
//! The server holds no simulation state. Each request builds its own
//! `SimulationController` from the shared configuration, so sessions are
//! isolated without locking.

pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
