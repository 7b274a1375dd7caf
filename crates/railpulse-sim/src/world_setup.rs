//! Entity spawn factories for setting up the simulation world.
//!
//! The fleet is fixed seed data: four trains, two per route. Entity count
//! is constant for the process lifetime — trains are never despawned.

use hecs::World;

use railpulse_core::components::*;
use railpulse_core::enums::{RouteId, TrainClass, TrainStatus};

/// Seed data for one train.
pub struct TrainSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub class: TrainClass,
    pub route: RouteId,
    /// Scene units per simulated second.
    pub base_speed: f64,
    /// Starting fractional position.
    pub t: f64,
    pub status: TrainStatus,
    pub occupancy_pct: f64,
}

/// The fixed fleet, as shown on the dashboard at load.
pub fn fleet() -> [TrainSeed; 4] {
    [
        TrainSeed {
            code: "12001",
            name: "Shatabdi",
            class: TrainClass::Express,
            route: RouteId::A,
            base_speed: 120.0,
            t: 0.10,
            status: TrainStatus::OnTime,
            occupancy_pct: 62.0,
        },
        TrainSeed {
            code: "12951",
            name: "Rajdhani",
            class: TrainClass::Express,
            route: RouteId::B,
            base_speed: 130.0,
            t: 0.30,
            status: TrainStatus::Delayed,
            occupancy_pct: 74.0,
        },
        TrainSeed {
            code: "22691",
            name: "Superfast",
            class: TrainClass::Express,
            route: RouteId::A,
            base_speed: 110.0,
            t: 0.55,
            status: TrainStatus::OnTime,
            occupancy_pct: 55.0,
        },
        TrainSeed {
            code: "17018",
            name: "Exp",
            class: TrainClass::Passenger,
            route: RouteId::B,
            base_speed: 100.0,
            t: 0.70,
            status: TrainStatus::OnTime,
            occupancy_pct: 48.0,
        },
    ]
}

/// Spawn the full seed fleet.
pub fn spawn_fleet(world: &mut World) {
    for seed in fleet() {
        spawn_train(world, &seed);
    }
}

/// Spawn a single train entity from seed data.
pub fn spawn_train(world: &mut World, seed: &TrainSeed) -> hecs::Entity {
    world.spawn((
        TrainMeta {
            code: seed.code.to_string(),
            name: seed.name.to_string(),
            class: seed.class,
            selected: false,
            highlighted: false,
        },
        OnRoute { route: seed.route },
        Kinematics {
            base_speed: seed.base_speed,
            t: seed.t,
        },
        ServiceState {
            status: seed.status,
            occupancy_pct: seed.occupancy_pct,
        },
        SpeedBoost::default(),
    ))
}
