//! Simulation loop thread — runs the engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go out through a
//! `SnapshotSink` and are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use railpulse_core::commands::ControlCommand;
use railpulse_core::constants::TICK_RATE;
use railpulse_core::state::DashboardSnapshot;
use railpulse_sim::engine::{SimConfig, SimEngine};

/// Duration of one loop iteration. The loop cadence is fixed; time scale
/// changes the simulated seconds per tick inside the engine, not the sleep.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the shell to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A control command to forward to the simulation engine.
    Control(ControlCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Receives each published snapshot. Any `FnMut` closure works.
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &DashboardSnapshot);
}

impl<F> SnapshotSink for F
where
    F: FnMut(&DashboardSnapshot) + Send + 'static,
{
    fn publish(&mut self, snapshot: &DashboardSnapshot) {
        self(snapshot);
    }
}

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the shell to use.
pub fn spawn_sim_loop(
    config: SimConfig,
    sink: impl SnapshotSink,
    latest_snapshot: Arc<Mutex<Option<DashboardSnapshot>>>,
) -> std::io::Result<mpsc::Sender<LoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("railpulse-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, sink, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The loop body. Runs until Shutdown command or channel disconnect.
fn run_sim_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    mut sink: impl SnapshotSink,
    latest_snapshot: &Mutex<Option<DashboardSnapshot>>,
) {
    let mut engine = SimEngine::new(config);
    let mut next_tick_time = Instant::now();

    log::info!("simulation loop started (seed {})", config.seed);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Control(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => {
                    log::info!("simulation loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause and time scale internally)
        let snapshot = engine.tick();

        // 3. Publish snapshot to the sink
        sink.publish(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railpulse_core::commands::ControlCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Control(ControlCommand::Pause)).unwrap();
        tx.send(LoopCommand::Control(ControlCommand::Resume))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Control(ControlCommand::Pause)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Control(ControlCommand::Resume)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimEngine::new(SimConfig::default());

        // Run enough ticks to accumulate notifications and ghosts
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_publishes_and_shuts_down() {
        let published = Arc::new(Mutex::new(0usize));
        let counter = published.clone();
        let latest = Arc::new(Mutex::new(None));

        let tx = spawn_sim_loop(
            SimConfig::default(),
            move |_snapshot: &railpulse_core::state::DashboardSnapshot| {
                *counter.lock().unwrap() += 1;
            },
            latest.clone(),
        )
        .unwrap();

        // Give the loop a few ticks to run.
        std::thread::sleep(Duration::from_millis(100));
        tx.send(LoopCommand::Shutdown).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        assert!(*published.lock().unwrap() > 0, "no snapshots published");
        let snapshot = latest.lock().unwrap();
        assert!(snapshot.is_some(), "no snapshot stored for polling");
        assert_eq!(snapshot.as_ref().unwrap().trains.len(), 4);
    }
}
