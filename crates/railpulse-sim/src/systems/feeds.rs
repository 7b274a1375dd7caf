//! Dashboard feed systems: the fabricated predicted-delay series and the
//! KPI card figures.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use railpulse_core::components::{Kinematics, ServiceState, SpeedBoost};
use railpulse_core::constants::{DELAY_SERIES_INTERVAL_SECS, DELAY_SERIES_LEN};
use railpulse_core::enums::TrainStatus;
use railpulse_core::state::{DelayPoint, KpiView};

use crate::systems::movement::effective_speed;

/// Regenerate the delay series when its interval elapses.
pub fn run(
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    next_series_at: &mut f64,
    series: &mut Vec<DelayPoint>,
) {
    if now_secs < *next_series_at {
        return;
    }
    while now_secs >= *next_series_at {
        *next_series_at += DELAY_SERIES_INTERVAL_SECS;
    }
    *series = generate_series(rng, now_secs);
}

/// Fabricate the 24-point predicted-delay series: a slow sine drift with
/// uniform noise on top, rounded to whole index points.
pub fn generate_series(rng: &mut ChaCha8Rng, now_secs: f64) -> Vec<DelayPoint> {
    (0..DELAY_SERIES_LEN)
        .map(|i| {
            let value =
                30.0 + 20.0 * ((now_secs + i as f64) / 2.0).sin() + rng.gen_range(0.0..10.0);
            DelayPoint {
                t: i as u32,
                v: value.round(),
            }
        })
        .collect()
}

/// Build KPI figures from the current fleet.
pub fn build_kpis(world: &World) -> KpiView {
    let mut kpis = KpiView {
        routes: 2,
        ..Default::default()
    };

    let mut speed_sum = 0.0;
    let mut count = 0u32;
    for (_entity, (service, kin, boost)) in world
        .query::<(&ServiceState, &Kinematics, &SpeedBoost)>()
        .iter()
    {
        match service.status {
            TrainStatus::OnTime => kpis.on_time += 1,
            TrainStatus::Delayed => kpis.delayed += 1,
            TrainStatus::Stopped => kpis.stopped += 1,
        }
        speed_sum += effective_speed(kin, boost);
        count += 1;
    }

    if count > 0 {
        kpis.avg_speed = speed_sum / count as f64;
    }
    kpis
}
