//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{RouteId, TrainClass, TrainStatus};

/// Identity and display attributes of a train.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainMeta {
    /// Train number, e.g. "12001".
    pub code: String,
    /// Display name, e.g. "Shatabdi".
    pub name: String,
    /// Service category.
    pub class: TrainClass,
    /// Whether this train is selected in the detail dialog.
    pub selected: bool,
    /// Whether this train is highlighted by the search box.
    pub highlighted: bool,
}

/// Which route the train runs on. Never changes after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OnRoute {
    pub route: RouteId,
}

/// Kinematic state along the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Base speed in scene units per simulated second.
    pub base_speed: f64,
    /// Fractional position along the route, always in `[0, 1)`.
    pub t: f64,
}

/// Operational status and crowding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServiceState {
    pub status: TrainStatus,
    /// Occupancy percent, kept within `[OCCUPANCY_MIN, OCCUPANCY_MAX]`.
    pub occupancy_pct: f64,
}

/// Temporary speed boost. Inactive while `remaining_secs` is zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedBoost {
    /// Simulated seconds of boost left.
    pub remaining_secs: f64,
    /// Multiplier applied to base speed while active.
    pub factor: f64,
}

impl Default for SpeedBoost {
    fn default() -> Self {
        Self {
            remaining_secs: 0.0,
            factor: crate::constants::BOOST_FACTOR,
        }
    }
}
