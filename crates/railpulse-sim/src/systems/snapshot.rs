//! Snapshot system: queries the ECS world and builds a complete
//! DashboardSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use railpulse_core::components::*;
use railpulse_core::constants::ETA_FULL_ROUTE_MINUTES;
use railpulse_core::events::{Notification, ToneCue};
use railpulse_core::state::*;
use railpulse_core::types::SimTime;
use railpulse_route::{Route, RouteSet};

use crate::systems::feeds;
use crate::systems::ghosts;
use crate::systems::movement::effective_speed;

/// Polyline resolution for route rendering.
const ROUTE_POLYLINE_POINTS: usize = 64;

/// Build a complete DashboardSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    routes: &RouteSet,
    time: &SimTime,
    paused: bool,
    time_scale: f64,
    toggles: TogglesView,
    efficiency_pct: i32,
    delay_series: &[DelayPoint],
    notifications: Vec<Notification>,
    tones: Vec<ToneCue>,
) -> DashboardSnapshot {
    DashboardSnapshot {
        time: *time,
        paused,
        time_scale,
        toggles,
        routes: build_routes(routes),
        trains: build_trains(world, routes, &toggles),
        kpis: feeds::build_kpis(world),
        delay_index: delay_series.to_vec(),
        efficiency_pct,
        notifications,
        tones,
    }
}

/// Build RouteView list with sampled polylines and waypoint positions.
fn build_routes(routes: &RouteSet) -> Vec<RouteView> {
    routes
        .iter()
        .map(|route| RouteView {
            id: route.id(),
            name: route.name().to_string(),
            points: route.curve().polyline(ROUTE_POLYLINE_POINTS),
            waypoints: route
                .waypoints()
                .iter()
                .map(|wp| WaypointView {
                    name: wp.name.to_string(),
                    t: wp.t,
                    position: route.curve().point_at(wp.t),
                    accessible: wp.accessible,
                })
                .collect(),
        })
        .collect()
}

/// Build TrainView list from all train entities, sorted by code.
fn build_trains(world: &World, routes: &RouteSet, toggles: &TogglesView) -> Vec<TrainView> {
    let mut trains: Vec<TrainView> = world
        .query::<(&TrainMeta, &OnRoute, &Kinematics, &ServiceState, &SpeedBoost)>()
        .iter()
        .map(|(_entity, (meta, on_route, kin, service, boost))| {
            let route = routes.get(on_route.route);
            let speed = effective_speed(kin, boost);

            TrainView {
                code: meta.code.clone(),
                name: meta.name.clone(),
                class: meta.class,
                route: on_route.route,
                t: kin.t,
                position: route.curve().point_at(kin.t),
                speed,
                base_speed: kin.base_speed,
                status: service.status,
                occupancy_pct: service.occupancy_pct,
                selected: meta.selected,
                highlighted: meta.highlighted,
                boost_remaining_secs: boost.remaining_secs,
                eta_minutes: ((1.0 - kin.t) * ETA_FULL_ROUTE_MINUTES).round() as i64,
                next_stop: build_next_stop(route, kin.t, speed),
                ghosts: if toggles.predictions {
                    ghosts::project(route, kin.t, speed)
                } else {
                    Vec::new()
                },
                heat: toggles.heatmap.then_some(service.occupancy_pct / 100.0),
            }
        })
        .collect();

    trains.sort_by(|a, b| a.code.cmp(&b.code));
    trains
}

/// ETA to the next waypoint ahead, wrapping past the route end.
fn build_next_stop(route: &Route, t: f64, speed: f64) -> Option<NextStopView> {
    if speed <= 0.0 {
        return None;
    }
    route.next_waypoint(t).map(|(waypoint, frac_ahead)| NextStopView {
        name: waypoint.name.to_string(),
        eta_secs: frac_ahead * route.curve().length() / speed,
    })
}
