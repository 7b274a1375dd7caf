//! Control commands sent from the dashboard shell to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ScenarioAction;

/// All possible dashboard actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    // --- Simulation control ---
    /// Pause the simulation (trains freeze, timers freeze).
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set the time-scale multiplier (clamped to [0, MAX_TIME_SCALE]).
    SetTimeScale { scale: f64 },
    /// Rebuild the world from seed data and restart the clock.
    Reset,

    // --- Train selection ---
    /// Open the detail dialog for a train.
    SelectTrain { code: String },
    /// Close the detail dialog.
    Deselect,
    /// Highlight a train matched by number or name (the search box).
    HighlightTrain { query: String },
    /// Clear any search highlight.
    ClearHighlight,

    // --- Mock train actions (detail dialog) ---
    /// Apply a temporary speed boost to a train.
    BoostTrain { code: String },
    /// Fire a "visualizing route" notification; changes nothing else.
    VisualizeRoute { code: String },

    // --- Display toggles ---
    TogglePredictions,
    ToggleHeatmap,
    ToggleDayNight,

    // --- Control-panel scenarios ---
    /// Fire a mock scenario (reroute / congestion / emergency).
    Scenario { action: ScenarioAction },
}
