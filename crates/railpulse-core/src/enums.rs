//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Identifier for one of the two fixed routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteId {
    /// North–south corridor (Delhi → Hyderabad).
    #[default]
    A,
    /// Western arc (Mumbai → Delhi).
    B,
}

/// Operational status of a train.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainStatus {
    #[default]
    OnTime,
    Delayed,
    Stopped,
}

impl TrainStatus {
    /// Human-readable label, as shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            TrainStatus::OnTime => "On-time",
            TrainStatus::Delayed => "Delayed",
            TrainStatus::Stopped => "Stopped",
        }
    }
}

/// Service category, matching the dashboard's filter checkboxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainClass {
    #[default]
    Express,
    Passenger,
    Freight,
    Metro,
}

/// Mock control-panel scenario buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioAction {
    /// Simulate an AI reroute (efficiency up).
    Reroute,
    /// Simulate track congestion (efficiency down).
    Congestion,
    /// Trigger an emergency alert (efficiency down hard).
    Emergency,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Critical,
}
