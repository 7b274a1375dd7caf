//! Predictive ghost markers.
//!
//! Projects a train's position forward in fixed steps of travel time,
//! producing up to three future positions at decreasing opacity. Purely
//! illustrative: recomputed from current state, never persisted.

use railpulse_core::constants::{GHOST_OPACITIES, GHOST_STEP_SECS};
use railpulse_core::state::GhostView;
use railpulse_core::types::wrap_unit;
use railpulse_route::Route;

/// Project ghost markers ahead of fractional position `t`.
pub fn project(route: &Route, t: f64, effective_speed: f64) -> Vec<GhostView> {
    let length = route.curve().length();
    GHOST_OPACITIES
        .iter()
        .enumerate()
        .map(|(step, &opacity)| {
            let ghost_t = wrap_unit(
                t + (step as f64 + 1.0) * effective_speed * GHOST_STEP_SECS / length,
            );
            GhostView {
                t: ghost_t,
                position: route.curve().point_at(ghost_t),
                opacity,
            }
        })
        .collect()
}
