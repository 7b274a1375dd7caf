//! Kinematic integration system.
//!
//! Advances each train's fractional position by `speed * dt / route_length`,
//! wrapped into [0, 1) — reaching the route end loops back to the start.
//! Also counts down active speed boosts.

use hecs::World;

use railpulse_core::components::{Kinematics, OnRoute, SpeedBoost};
use railpulse_core::types::wrap_unit;
use railpulse_route::RouteSet;

/// Effective speed: base speed times boost factor while a boost is active.
pub fn effective_speed(kin: &Kinematics, boost: &SpeedBoost) -> f64 {
    if boost.remaining_secs > 0.0 {
        kin.base_speed * boost.factor
    } else {
        kin.base_speed
    }
}

/// Run kinematic integration for all trains. `dt` is simulated seconds.
pub fn run(world: &mut World, routes: &RouteSet, dt: f64) {
    for (_entity, (kin, on_route, boost)) in
        world.query_mut::<(&mut Kinematics, &OnRoute, &mut SpeedBoost)>()
    {
        let length = routes.get(on_route.route).curve().length();
        let speed = effective_speed(kin, boost);
        kin.t = wrap_unit(kin.t + speed * dt / length);

        if boost.remaining_secs > 0.0 {
            boost.remaining_secs = (boost.remaining_secs - dt).max(0.0);
        }
    }
}
