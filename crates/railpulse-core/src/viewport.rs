//! Pan/zoom viewport state for the map scene.
//!
//! The map applies a single affine transform (`translate(offset) scale(s)`)
//! to the whole scene; this struct owns that state and its clamping rules.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_WHEEL_FACTOR};

/// Map viewport: zoom scale plus pan offset, with an in-flight drag anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset: DVec2,
    drag_anchor: Option<DVec2>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: DVec2::ZERO,
            drag_anchor: None,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a wheel event. Positive `delta_y` (scrolling down) zooms out.
    /// Scale is clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn wheel(&mut self, delta_y: f64) {
        self.scale = (self.scale - delta_y * ZOOM_WHEEL_FACTOR).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Begin a drag at the given cursor position.
    pub fn begin_drag(&mut self, cursor: DVec2) {
        self.drag_anchor = Some(cursor - self.offset);
    }

    /// Continue a drag; no-op if no drag is in flight.
    pub fn drag_to(&mut self, cursor: DVec2) {
        if let Some(anchor) = self.drag_anchor {
            self.offset = cursor - anchor;
        }
    }

    /// End the drag.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Whether a drag is currently in flight.
    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Map a scene point to screen coordinates.
    pub fn transform(&self, point: DVec2) -> DVec2 {
        self.offset + point * self.scale
    }
}
