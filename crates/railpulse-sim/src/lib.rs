//! Simulation engine for RAILPULSE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces DashboardSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use railpulse_core as core;
pub use engine::{SimConfig, SimEngine};
