//! Fundamental time and position types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// `elapsed_secs` accumulates *simulated* seconds — the per-tick `dt` after
/// the time-scale multiplier and the frame cap have been applied — so every
/// interval-driven system (dispatch, feeds, arrival cooldowns) speeds up and
/// freezes together with the trains.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each advancing tick).
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` simulated seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Wrap a fractional route offset into `[0, 1)`.
///
/// Positions wrap rather than clamp: a train reaching the end of its route
/// loops back to the start. Handles negative inputs and the floating-point
/// edge where `rem_euclid` returns exactly 1.0.
pub fn wrap_unit(t: f64) -> f64 {
    let w = t.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
