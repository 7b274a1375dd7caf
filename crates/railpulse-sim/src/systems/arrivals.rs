//! Arrival detection system.
//!
//! A train within `ARRIVAL_TOLERANCE` scene units of a waypoint fires an
//! arrival notification for that (train, waypoint) pair, then stays silent
//! for the pair's cooldown even if the proximity persists across frames.

use std::collections::HashMap;

use hecs::{Entity, World};

use railpulse_core::components::{Kinematics, OnRoute, TrainMeta};
use railpulse_core::constants::*;
use railpulse_core::enums::NoticeLevel;
use railpulse_core::events::{Notification, ToneCue};
use railpulse_route::RouteSet;

/// Per-(train, waypoint) record of the last arrival firing.
#[derive(Debug, Default)]
pub struct ArrivalLedger {
    last_fired: HashMap<(Entity, usize), f64>,
}

impl ArrivalLedger {
    /// True if the pair may fire at `now_secs`; records the firing when so.
    pub fn try_fire(&mut self, key: (Entity, usize), now_secs: f64) -> bool {
        match self.last_fired.get(&key) {
            Some(&last) if now_secs - last < ARRIVAL_COOLDOWN_SECS => false,
            _ => {
                self.last_fired.insert(key, now_secs);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.last_fired.clear();
    }
}

/// Check every train against its route's waypoints.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &World,
    routes: &RouteSet,
    now_secs: f64,
    ledger: &mut ArrivalLedger,
    notifications: &mut Vec<Notification>,
    tones: &mut Vec<ToneCue>,
    current_tick: u64,
) {
    for (entity, (meta, on_route, kin)) in world
        .query::<(&TrainMeta, &OnRoute, &Kinematics)>()
        .iter()
    {
        let route = routes.get(on_route.route);
        let position = route.curve().point_at(kin.t);

        for (index, waypoint) in route.waypoints().iter().enumerate() {
            let waypoint_pos = route.curve().point_at(waypoint.t);
            if position.distance(waypoint_pos) > ARRIVAL_TOLERANCE {
                continue;
            }
            if !ledger.try_fire((entity, index), now_secs) {
                continue;
            }
            notifications.push(Notification::new(
                NoticeLevel::Info,
                format!("{} ({}) arriving at {}", meta.name, meta.code, waypoint.name),
                Some(format!("{} route", route.name())),
                current_tick,
            ));
            tones.push(ToneCue::new(TONE_ARRIVAL_HZ, TONE_SHORT_SECS));
        }
    }
}
