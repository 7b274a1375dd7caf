//! RAILPULSE application shell.
//!
//! Hosts the simulation loop on its own thread and exposes a small
//! `Runtime` handle for sending control commands and polling the latest
//! dashboard snapshot.

pub mod runtime;
pub mod sim_loop;

pub use railpulse_core as core;
pub use runtime::Runtime;
