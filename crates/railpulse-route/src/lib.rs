//! Route geometry for RAILPULSE.
//!
//! Cubic Bézier curves with arc-length parametrization, waypoint
//! placement, and the two fixed route definitions.

pub use railpulse_core as core;

pub mod curve;
pub mod route;

pub use curve::{Curve, CubicSegment};
pub use route::{standard_routes, Route, RouteSet, Waypoint};
