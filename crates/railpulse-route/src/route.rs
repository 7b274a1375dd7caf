//! The two fixed routes and their station tables.
//!
//! Control points and station offsets are transcribed from the dashboard's
//! map scene (1200×600 units). Routes are built once at engine start and
//! never created or destroyed at runtime.

use glam::DVec2;

use railpulse_core::enums::RouteId;
use railpulse_core::types::wrap_unit;

use crate::curve::{CubicSegment, Curve};

/// A named station at a fixed fractional offset on a route.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub name: &'static str,
    /// Fractional offset along the route.
    pub t: f64,
    /// Step-free access available at this station.
    pub accessible: bool,
}

/// An immutable named curve with its stations.
#[derive(Debug, Clone)]
pub struct Route {
    id: RouteId,
    name: &'static str,
    curve: Curve,
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(id: RouteId, name: &'static str, curve: Curve, waypoints: Vec<Waypoint>) -> Self {
        Self {
            id,
            name,
            curve,
            waypoints,
        }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The first waypoint strictly ahead of `t`, wrapping past the route end.
    /// Returns the waypoint and its forward fractional distance.
    pub fn next_waypoint(&self, t: f64) -> Option<(&Waypoint, f64)> {
        self.waypoints
            .iter()
            .map(|wp| (wp, wrap_unit(wp.t - t)))
            .filter(|(_, d)| *d > f64::EPSILON)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Both routes, indexable by id.
#[derive(Debug, Clone)]
pub struct RouteSet {
    routes: [Route; 2],
}

impl RouteSet {
    /// Build the standard two-route network.
    pub fn standard() -> Self {
        Self::new(standard_routes())
    }

    /// Build a network from explicit routes (A first, then B).
    pub fn new(routes: [Route; 2]) -> Self {
        Self { routes }
    }

    pub fn get(&self, id: RouteId) -> &Route {
        match id {
            RouteId::A => &self.routes[0],
            RouteId::B => &self.routes[1],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// Build the two fixed routes.
pub fn standard_routes() -> [Route; 2] {
    // Path A: "M 60 520 C 280 400, 420 420, 600 300 C 760 200, 920 220, 1140 120"
    let curve_a = Curve::new(&[
        CubicSegment::new(
            DVec2::new(60.0, 520.0),
            DVec2::new(280.0, 400.0),
            DVec2::new(420.0, 420.0),
            DVec2::new(600.0, 300.0),
        ),
        CubicSegment::new(
            DVec2::new(600.0, 300.0),
            DVec2::new(760.0, 200.0),
            DVec2::new(920.0, 220.0),
            DVec2::new(1140.0, 120.0),
        ),
    ]);

    // Path B: "M 60 420 C 260 300, 420 320, 600 200 C 780 100, 940 120, 1140 60"
    let curve_b = Curve::new(&[
        CubicSegment::new(
            DVec2::new(60.0, 420.0),
            DVec2::new(260.0, 300.0),
            DVec2::new(420.0, 320.0),
            DVec2::new(600.0, 200.0),
        ),
        CubicSegment::new(
            DVec2::new(600.0, 200.0),
            DVec2::new(780.0, 100.0),
            DVec2::new(940.0, 120.0),
            DVec2::new(1140.0, 60.0),
        ),
    ]);

    let stations_a = vec![
        wp("Delhi", 0.05, true),
        wp("Agra", 0.18, true),
        wp("Jhansi", 0.32, false),
        wp("Bhopal", 0.48, true),
        wp("Itarsi", 0.60, false),
        wp("Nagpur", 0.72, true),
        wp("Balharshah", 0.82, false),
        wp("Secunderabad", 0.92, true),
        wp("Hyderabad", 0.95, true),
    ];

    let stations_b = vec![
        wp("Mumbai", 0.06, true),
        wp("Surat", 0.18, true),
        wp("Vadodara", 0.28, true),
        wp("Ahmedabad", 0.36, true),
        wp("Ajmer", 0.48, false),
        wp("Jaipur", 0.56, true),
        wp("Alwar", 0.64, false),
        wp("Mathura", 0.76, true),
        wp("Delhi", 0.90, true),
    ];

    [
        Route {
            id: RouteId::A,
            name: "Grand Trunk Corridor",
            curve: curve_a,
            waypoints: stations_a,
        },
        Route {
            id: RouteId::B,
            name: "Western Arc",
            curve: curve_b,
            waypoints: stations_b,
        },
    ]
}

fn wp(name: &'static str, t: f64, accessible: bool) -> Waypoint {
    Waypoint {
        name,
        t,
        accessible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_routes_shape() {
        let set = RouteSet::standard();
        for route in set.iter() {
            assert!(route.curve().length() > 1000.0, "route spans the scene");
            assert_eq!(route.waypoints().len(), 9);
            for wp in route.waypoints() {
                assert!((0.0..1.0).contains(&wp.t));
            }
        }
        assert_eq!(set.get(RouteId::A).name(), "Grand Trunk Corridor");
        assert_eq!(set.get(RouteId::B).name(), "Western Arc");
    }

    #[test]
    fn test_waypoints_sorted_along_route() {
        let set = RouteSet::standard();
        for route in set.iter() {
            let ts: Vec<f64> = route.waypoints().iter().map(|w| w.t).collect();
            assert!(ts.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_route_endpoints_match_scene() {
        let set = RouteSet::standard();
        let a = set.get(RouteId::A).curve();
        assert!(a.point_at(0.0).distance(DVec2::new(60.0, 520.0)) < 1e-6);
        assert!(a.point_at_len(a.length()).distance(DVec2::new(1140.0, 120.0)) < 1e-6);
    }

    #[test]
    fn test_next_waypoint_forward() {
        let set = RouteSet::standard();
        let route = set.get(RouteId::A);

        let (wp, d) = route.next_waypoint(0.40).unwrap();
        assert_eq!(wp.name, "Bhopal");
        assert!((d - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_next_waypoint_wraps() {
        let set = RouteSet::standard();
        let route = set.get(RouteId::A);

        // Past the last station: the next one is Delhi, across the wrap.
        let (wp, d) = route.next_waypoint(0.97).unwrap();
        assert_eq!(wp.name, "Delhi");
        assert!((d - 0.08).abs() < 1e-9);
    }
}
