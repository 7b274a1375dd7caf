//! Dispatch system — periodic random status/occupancy mutation.
//!
//! Every `STATUS_MUTATION_INTERVAL_SECS` of simulated time, one train is
//! picked uniformly at random and assigned a fresh status from the weighted
//! distribution (60% on-time, 20% delayed, 20% stopped). Occupancy shifts
//! by a status-dependent delta plus noise, clamped to its bounds.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use railpulse_core::components::{ServiceState, TrainMeta};
use railpulse_core::constants::*;
use railpulse_core::enums::{NoticeLevel, TrainStatus};
use railpulse_core::events::{Notification, ToneCue};

/// Check the mutation schedule and apply any due mutations.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    next_mutation_at: &mut f64,
    notifications: &mut Vec<Notification>,
    tones: &mut Vec<ToneCue>,
    current_tick: u64,
) {
    while now_secs >= *next_mutation_at {
        *next_mutation_at += STATUS_MUTATION_INTERVAL_SECS;
        mutate_one(world, rng, notifications, tones, current_tick);
    }
}

/// Pick one train at random and mutate its status and occupancy.
fn mutate_one(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    notifications: &mut Vec<Notification>,
    tones: &mut Vec<ToneCue>,
    current_tick: u64,
) {
    let targets: Vec<hecs::Entity> = world
        .query::<&TrainMeta>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    if targets.is_empty() {
        return;
    }
    let entity = targets[rng.gen_range(0..targets.len())];

    let new_status = roll_status(rng);
    let mut changed = false;
    if let Ok(mut service) = world.get::<&mut ServiceState>(entity) {
        changed = service.status != new_status;
        service.occupancy_pct = occupancy_after(service.occupancy_pct, new_status, rng);
        service.status = new_status;
    }

    if !changed {
        return;
    }
    if let Ok(meta) = world.get::<&TrainMeta>(entity) {
        let (level, tone) = match new_status {
            TrainStatus::OnTime => (
                NoticeLevel::Success,
                ToneCue::new(TONE_ON_TIME_HZ, TONE_SHORT_SECS),
            ),
            TrainStatus::Delayed => (
                NoticeLevel::Warning,
                ToneCue::new(TONE_DELAYED_HZ, TONE_SHORT_SECS),
            ),
            TrainStatus::Stopped => (
                NoticeLevel::Critical,
                ToneCue::new(TONE_STOPPED_HZ, TONE_LONG_SECS),
            ),
        };
        notifications.push(Notification::new(
            level,
            format!(
                "{} ({}) is now {}",
                meta.name,
                meta.code,
                new_status.label()
            ),
            None,
            current_tick,
        ));
        tones.push(tone);
    }
}

/// Draw a status from the weighted distribution.
pub fn roll_status(rng: &mut ChaCha8Rng) -> TrainStatus {
    let roll: f64 = rng.gen();
    if roll < STATUS_ON_TIME_WEIGHT {
        TrainStatus::OnTime
    } else if roll < STATUS_ON_TIME_WEIGHT + STATUS_DELAYED_WEIGHT {
        TrainStatus::Delayed
    } else {
        TrainStatus::Stopped
    }
}

/// Occupancy after a status transition: status delta plus uniform noise,
/// clamped to `[OCCUPANCY_MIN, OCCUPANCY_MAX]`.
pub fn occupancy_after(current: f64, new_status: TrainStatus, rng: &mut ChaCha8Rng) -> f64 {
    let delta = match new_status {
        TrainStatus::OnTime => OCCUPANCY_DELTA_ON_TIME,
        TrainStatus::Delayed => OCCUPANCY_DELTA_DELAYED,
        TrainStatus::Stopped => OCCUPANCY_DELTA_STOPPED,
    };
    let noise = rng.gen_range(-OCCUPANCY_NOISE..=OCCUPANCY_NOISE);
    (current + delta + noise).clamp(OCCUPANCY_MIN, OCCUPANCY_MAX)
}
