//! Dashboard snapshot — the complete visible state sent to the frontend each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{RouteId, TrainClass, TrainStatus};
use crate::events::{Notification, ToneCue};
use crate::types::SimTime;

/// Complete dashboard state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub time_scale: f64,
    pub toggles: TogglesView,
    pub routes: Vec<RouteView>,
    pub trains: Vec<TrainView>,
    pub kpis: KpiView,
    /// Fabricated predicted-delay series for the area chart.
    pub delay_index: Vec<DelayPoint>,
    /// Scheduling-efficiency gauge (percent).
    pub efficiency_pct: i32,
    pub notifications: Vec<Notification>,
    pub tones: Vec<ToneCue>,
}

/// Independent display toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TogglesView {
    /// Ghost future-position markers.
    pub predictions: bool,
    /// Occupancy heatmap overlay.
    pub heatmap: bool,
    /// Night display mode.
    pub night_mode: bool,
}

impl Default for TogglesView {
    fn default() -> Self {
        Self {
            predictions: true,
            heatmap: false,
            night_mode: false,
        }
    }
}

/// Route geometry for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteView {
    pub id: RouteId,
    pub name: String,
    /// Polyline sampled along the curve, in scene units.
    pub points: Vec<DVec2>,
    pub waypoints: Vec<WaypointView>,
}

/// A named station on a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointView {
    pub name: String,
    /// Fractional offset along the route.
    pub t: f64,
    pub position: DVec2,
    pub accessible: bool,
}

/// A visible train on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainView {
    pub code: String,
    pub name: String,
    pub class: TrainClass,
    pub route: RouteId,
    /// Fractional position along the route, in `[0, 1)`.
    pub t: f64,
    /// Scene position derived from `t`.
    pub position: DVec2,
    /// Effective speed (base × boost), scene units per second.
    pub speed: f64,
    pub base_speed: f64,
    pub status: TrainStatus,
    pub occupancy_pct: f64,
    pub selected: bool,
    pub highlighted: bool,
    /// Seconds of speed boost left, zero when inactive.
    pub boost_remaining_secs: f64,
    /// Mock dialog ETA: `round((1 - t) * 120)` minutes.
    pub eta_minutes: i64,
    /// Next waypoint ahead, with a physical ETA.
    pub next_stop: Option<NextStopView>,
    /// Projected future positions (empty unless predictions are on).
    pub ghosts: Vec<GhostView>,
    /// Occupancy-derived overlay intensity (present only with heatmap on).
    pub heat: Option<f64>,
}

/// The next waypoint a train will reach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStopView {
    pub name: String,
    /// Seconds until arrival at current effective speed.
    pub eta_secs: f64,
}

/// A projected future position, rendered at reduced opacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GhostView {
    pub t: f64,
    pub position: DVec2,
    pub opacity: f64,
}

/// KPI card figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiView {
    pub on_time: u32,
    pub delayed: u32,
    pub stopped: u32,
    /// Fleet-average effective speed, scene units per second.
    pub avg_speed: f64,
    pub routes: u32,
}

/// One point of the predicted-delay series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DelayPoint {
    /// Series index (x axis).
    pub t: u32,
    /// Delay index value (0-100 scale).
    pub v: f64,
}
