//! Events emitted by the simulation for toast and audio feedback.

use serde::{Deserialize, Serialize};

use crate::constants::TONE_GAIN;
use crate::enums::NoticeLevel;

/// A toast notification for the dashboard's notification stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub level: NoticeLevel,
    /// Headline, e.g. "Emergency alert triggered".
    pub title: String,
    /// Optional secondary line, e.g. "Medical assistance required at Nagpur".
    pub detail: Option<String>,
    /// Tick at which the event fired.
    pub tick: u64,
}

impl Notification {
    pub fn new(
        level: NoticeLevel,
        title: impl Into<String>,
        detail: Option<String>,
        tick: u64,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            detail,
            tick,
        }
    }
}

/// A short oscillator beep for the frontend sound hook.
/// Playback is best-effort; the simulation never depends on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ToneCue {
    /// Oscillator frequency in Hz.
    pub freq_hz: f64,
    /// Beep duration in seconds.
    pub duration_secs: f64,
    /// Output gain (0.0 - 1.0).
    pub gain: f64,
}

impl ToneCue {
    pub fn new(freq_hz: f64, duration_secs: f64) -> Self {
        Self {
            freq_hz,
            duration_secs,
            gain: TONE_GAIN,
        }
    }
}
