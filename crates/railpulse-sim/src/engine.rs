//! Simulation engine — the core of the dashboard.
//!
//! `SimEngine` owns the hecs ECS world, processes control commands,
//! runs all systems, and produces `DashboardSnapshot`s. Completely headless
//! (no shell dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use railpulse_core::commands::ControlCommand;
use railpulse_core::components::{SpeedBoost, TrainMeta};
use railpulse_core::constants::*;
use railpulse_core::enums::{NoticeLevel, ScenarioAction};
use railpulse_core::events::{Notification, ToneCue};
use railpulse_core::state::{DashboardSnapshot, DelayPoint, TogglesView};
use railpulse_core::types::SimTime;
use railpulse_route::RouteSet;

use crate::systems;
use crate::systems::arrivals::ArrivalLedger;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimEngine {
    world: World,
    routes: RouteSet,
    time: SimTime,
    paused: bool,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: SimConfig,
    command_queue: VecDeque<ControlCommand>,
    toggles: TogglesView,
    efficiency_pct: i32,
    delay_series: Vec<DelayPoint>,
    next_mutation_at: f64,
    next_series_at: f64,
    arrivals: ArrivalLedger,
    notifications: Vec<Notification>,
    tones: Vec<ToneCue>,
}

impl SimEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_fleet(&mut world);

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let delay_series = systems::feeds::generate_series(&mut rng, 0.0);

        Self {
            world,
            routes: RouteSet::standard(),
            time: SimTime::default(),
            paused: false,
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            rng,
            config,
            command_queue: VecDeque::new(),
            toggles: TogglesView::default(),
            efficiency_pct: EFFICIENCY_INITIAL,
            delay_series,
            next_mutation_at: STATUS_MUTATION_INTERVAL_SECS,
            next_series_at: DELAY_SERIES_INTERVAL_SECS,
            arrivals: ArrivalLedger::default(),
            notifications: Vec::new(),
            tones: Vec::new(),
        }
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> DashboardSnapshot {
        self.process_commands();

        if !self.paused {
            // The frame cap bounds the advance even at high time scales.
            let dt = (DT * self.time_scale).min(MAX_FRAME_DT);
            if dt > 0.0 {
                self.run_systems(dt);
                self.time.advance(dt);
            }
        }

        let notifications = std::mem::take(&mut self.notifications);
        let tones = std::mem::take(&mut self.tones);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.routes,
            &self.time,
            self.paused,
            self.time_scale,
            self.toggles,
            self.efficiency_pct,
            &self.delay_series,
            notifications,
            tones,
        )
    }

    /// Whether the simulation is paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the route network.
    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command.
    fn handle_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Pause => {
                self.paused = true;
            }
            ControlCommand::Resume => {
                self.paused = false;
            }
            ControlCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            ControlCommand::Reset => {
                self.reset();
            }
            ControlCommand::SelectTrain { code } => {
                for (_entity, meta) in self.world.query_mut::<&mut TrainMeta>() {
                    meta.selected = meta.code == code;
                }
            }
            ControlCommand::Deselect => {
                for (_entity, meta) in self.world.query_mut::<&mut TrainMeta>() {
                    meta.selected = false;
                }
            }
            ControlCommand::HighlightTrain { query } => {
                self.highlight_train(&query);
            }
            ControlCommand::ClearHighlight => {
                for (_entity, meta) in self.world.query_mut::<&mut TrainMeta>() {
                    meta.highlighted = false;
                }
            }
            ControlCommand::BoostTrain { code } => {
                self.boost_train(&code);
            }
            ControlCommand::VisualizeRoute { code } => {
                let found = self
                    .world
                    .query_mut::<&TrainMeta>()
                    .into_iter()
                    .find(|(_, meta)| meta.code == code)
                    .map(|(_, meta)| (meta.name.clone(), meta.code.clone()));
                if let Some((name, code)) = found {
                    self.notify(
                        NoticeLevel::Info,
                        format!("Visualizing route of {name} ({code})"),
                        Some("Projected path drawn on map".into()),
                        ToneCue::new(TONE_ARRIVAL_HZ, TONE_SHORT_SECS),
                    );
                }
            }
            ControlCommand::TogglePredictions => {
                self.toggles.predictions = !self.toggles.predictions;
            }
            ControlCommand::ToggleHeatmap => {
                self.toggles.heatmap = !self.toggles.heatmap;
            }
            ControlCommand::ToggleDayNight => {
                self.toggles.night_mode = !self.toggles.night_mode;
            }
            ControlCommand::Scenario { action } => {
                self.run_scenario(action);
            }
        }
    }

    /// Highlight the first train matched by number or name (case-insensitive).
    fn highlight_train(&mut self, query: &str) {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return;
        }

        let mut focused: Option<String> = None;
        for (_entity, meta) in self.world.query_mut::<&mut TrainMeta>() {
            let matched = focused.is_none()
                && (meta.code == needle || meta.name.to_lowercase().contains(&needle));
            meta.highlighted = matched;
            if matched {
                focused = Some(meta.code.clone());
            }
        }

        match focused {
            Some(code) => self.notify(
                NoticeLevel::Success,
                format!("Focusing train {code}"),
                Some("Zooming to the train on map".into()),
                ToneCue::new(TONE_FOCUS_HZ, TONE_SHORT_SECS),
            ),
            None => self.notify(
                NoticeLevel::Info,
                format!("No train matches \"{}\"", query.trim()),
                None,
                ToneCue::new(TONE_DELAYED_HZ, TONE_SHORT_SECS),
            ),
        }
    }

    /// Apply a temporary speed boost to the given train.
    fn boost_train(&mut self, code: &str) {
        let mut boosted: Option<String> = None;
        for (_entity, (meta, boost)) in self.world.query_mut::<(&TrainMeta, &mut SpeedBoost)>() {
            if meta.code == code {
                boost.remaining_secs = BOOST_DURATION_SECS;
                boosted = Some(meta.name.clone());
            }
        }

        if let Some(name) = boosted {
            self.notify(
                NoticeLevel::Success,
                format!("Speed boost applied to {name} ({code})"),
                Some(format!(
                    "+{:.0}% speed for {BOOST_DURATION_SECS:.0} s",
                    (BOOST_FACTOR - 1.0) * 100.0
                )),
                ToneCue::new(TONE_ACTION_HZ, TONE_SHORT_SECS),
            );
        }
    }

    /// Fire a mock control-panel scenario: toast, tone, efficiency bump.
    fn run_scenario(&mut self, action: ScenarioAction) {
        let (delta, level, title, detail, tone) = match action {
            ScenarioAction::Reroute => (
                4,
                NoticeLevel::Success,
                "Rerouting Rajdhani via Ajmer",
                "ETA improved by 6%",
                ToneCue::new(TONE_ON_TIME_HZ, TONE_SHORT_SECS),
            ),
            ScenarioAction::Congestion => (
                -6,
                NoticeLevel::Warning,
                "Track congestion simulated",
                "Delays increased near Bhopal",
                ToneCue::new(TONE_DELAYED_HZ, TONE_SHORT_SECS),
            ),
            ScenarioAction::Emergency => (
                -10,
                NoticeLevel::Critical,
                "Emergency alert triggered",
                "Medical assistance required at Nagpur",
                ToneCue::new(TONE_STOPPED_HZ, TONE_LONG_SECS),
            ),
        };

        self.efficiency_pct =
            (self.efficiency_pct + delta).clamp(EFFICIENCY_MIN, EFFICIENCY_MAX);
        self.notify(level, title, Some(detail.into()), tone);
    }

    fn notify(
        &mut self,
        level: NoticeLevel,
        title: impl Into<String>,
        detail: Option<String>,
        tone: ToneCue,
    ) {
        let title = title.into();
        log::debug!("notification: {title}");
        self.notifications
            .push(Notification::new(level, title, detail, self.time.tick));
        self.tones.push(tone);
    }

    /// Rebuild the world from seed data and restart the clock.
    /// The RNG is re-seeded, so a reset engine replays identically.
    fn reset(&mut self) {
        self.world.clear();
        world_setup::spawn_fleet(&mut self.world);
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.paused = false;
        self.time_scale = self.config.time_scale.clamp(0.0, MAX_TIME_SCALE);
        self.toggles = TogglesView::default();
        self.efficiency_pct = EFFICIENCY_INITIAL;
        self.delay_series = systems::feeds::generate_series(&mut self.rng, 0.0);
        self.next_mutation_at = STATUS_MUTATION_INTERVAL_SECS;
        self.next_series_at = DELAY_SERIES_INTERVAL_SECS;
        self.arrivals.clear();
        self.notifications.clear();
        self.tones.clear();
        log::info!("simulation reset (seed {})", self.config.seed);
    }

    /// Run all systems in order. `dt` is this tick's simulated seconds.
    fn run_systems(&mut self, dt: f64) {
        let now_secs = self.time.elapsed_secs + dt;

        // 1. Movement integration (positions wrap along their routes)
        systems::movement::run(&mut self.world, &self.routes, dt);
        // 2. Dispatch: random status/occupancy mutation on its interval
        systems::dispatch::run(
            &mut self.world,
            &mut self.rng,
            now_secs,
            &mut self.next_mutation_at,
            &mut self.notifications,
            &mut self.tones,
            self.time.tick,
        );
        // 3. Arrival detection with per-(train, waypoint) cooldown
        systems::arrivals::run(
            &self.world,
            &self.routes,
            now_secs,
            &mut self.arrivals,
            &mut self.notifications,
            &mut self.tones,
            self.time.tick,
        );
        // 4. Dashboard feed refresh (predicted-delay series)
        systems::feeds::run(
            &mut self.rng,
            now_secs,
            &mut self.next_series_at,
            &mut self.delay_series,
        );
    }
}
