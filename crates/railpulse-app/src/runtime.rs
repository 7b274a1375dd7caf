//! Runtime handle around the simulation loop thread.
//!
//! Owns the command channel and the shared latest-snapshot slot. Errors
//! cross this boundary as `String`, which is what a shell serializes out.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use railpulse_core::commands::ControlCommand;
use railpulse_core::state::DashboardSnapshot;
use railpulse_sim::engine::SimConfig;

use crate::sim_loop::{self, LoopCommand, SnapshotSink};

/// Handle to a running simulation loop.
pub struct Runtime {
    command_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: Arc<Mutex<Option<DashboardSnapshot>>>,
}

impl Runtime {
    /// Start the loop thread with the given config and snapshot sink.
    pub fn start(config: SimConfig, sink: impl SnapshotSink) -> Result<Self, String> {
        let latest_snapshot = Arc::new(Mutex::new(None));
        let command_tx = sim_loop::spawn_sim_loop(config, sink, latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn simulation loop: {e}"))?;
        Ok(Self {
            command_tx,
            latest_snapshot,
        })
    }

    /// Forward a control command to the simulation.
    pub fn send(&self, command: ControlCommand) -> Result<(), String> {
        self.command_tx
            .send(LoopCommand::Control(command))
            .map_err(|e| format!("Failed to send command: {e}"))
    }

    /// Latest snapshot, for synchronous polling. `None` before the first tick.
    pub fn latest_snapshot(&self) -> Result<Option<DashboardSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Ask the loop thread to exit. Safe to call more than once.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ignore_snapshots(_snapshot: &DashboardSnapshot) {}

    #[test]
    fn test_runtime_polls_snapshots() {
        let runtime = Runtime::start(SimConfig::default(), ignore_snapshots).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = runtime.latest_snapshot().unwrap();
        let snapshot = snapshot.expect("no snapshot after 100ms");
        assert!(snapshot.time.tick > 0);
        assert_eq!(snapshot.trains.len(), 4);
    }

    #[test]
    fn test_runtime_forwards_commands() {
        let runtime = Runtime::start(SimConfig::default(), ignore_snapshots).unwrap();
        runtime.send(ControlCommand::Pause).unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = runtime.latest_snapshot().unwrap().unwrap();
        assert!(snapshot.paused);

        runtime.send(ControlCommand::Resume).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        let snapshot = runtime.latest_snapshot().unwrap().unwrap();
        assert!(!snapshot.paused);
    }

    #[test]
    fn test_send_after_shutdown_errors() {
        let runtime = Runtime::start(SimConfig::default(), ignore_snapshots).unwrap();
        runtime.shutdown();
        std::thread::sleep(Duration::from_millis(100));
        assert!(runtime.send(ControlCommand::Pause).is_err());
    }
}
