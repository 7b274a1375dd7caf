//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at 1x time scale.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum simulated seconds applied in a single tick.
/// Caps the advance after a stall so trains never jump visibly.
pub const MAX_FRAME_DT: f64 = 0.05;

/// Maximum time-scale multiplier.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Scene ---

/// Scene width in map units (the map's SVG viewBox).
pub const SCENE_WIDTH: f64 = 1200.0;

/// Scene height in map units.
pub const SCENE_HEIGHT: f64 = 600.0;

// --- Dispatch (status mutation) ---

/// Interval between random status mutations (simulated seconds).
pub const STATUS_MUTATION_INTERVAL_SECS: f64 = 5.0;

/// Probability that a mutation lands on OnTime.
pub const STATUS_ON_TIME_WEIGHT: f64 = 0.6;

/// Probability that a mutation lands on Delayed (the rest is Stopped).
pub const STATUS_DELAYED_WEIGHT: f64 = 0.2;

/// Occupancy delta when a train goes Stopped (passengers pile up).
pub const OCCUPANCY_DELTA_STOPPED: f64 = 25.0;

/// Occupancy delta when a train goes Delayed.
pub const OCCUPANCY_DELTA_DELAYED: f64 = 15.0;

/// Occupancy delta when a train recovers to OnTime.
pub const OCCUPANCY_DELTA_ON_TIME: f64 = -15.0;

/// Half-width of the uniform noise added to every occupancy delta.
pub const OCCUPANCY_NOISE: f64 = 6.0;

/// Occupancy floor (percent).
pub const OCCUPANCY_MIN: f64 = 10.0;

/// Occupancy ceiling (percent).
pub const OCCUPANCY_MAX: f64 = 98.0;

// --- Arrivals ---

/// Scene-unit distance within which a train counts as "at" a waypoint.
pub const ARRIVAL_TOLERANCE: f64 = 12.0;

/// Minimum simulated seconds between arrival notifications for the same
/// (train, waypoint) pair.
pub const ARRIVAL_COOLDOWN_SECS: f64 = 15.0;

// --- Ghost markers ---

/// Simulated seconds of travel projected per ghost step.
pub const GHOST_STEP_SECS: f64 = 1.5;

/// Render opacity per ghost marker, nearest first.
pub const GHOST_OPACITIES: [f64; 3] = [0.45, 0.30, 0.15];

// --- Speed boost ---

/// Effective-speed multiplier while a boost is active.
pub const BOOST_FACTOR: f64 = 1.3;

/// Boost duration in simulated seconds.
pub const BOOST_DURATION_SECS: f64 = 10.0;

// --- Dashboard feeds ---

/// Points in the predicted-delay series.
pub const DELAY_SERIES_LEN: usize = 24;

/// Interval between delay-series regenerations (simulated seconds).
pub const DELAY_SERIES_INTERVAL_SECS: f64 = 2.5;

/// Starting value of the scheduling-efficiency gauge (percent).
pub const EFFICIENCY_INITIAL: i32 = 72;

/// Efficiency gauge floor.
pub const EFFICIENCY_MIN: i32 = 40;

/// Efficiency gauge ceiling.
pub const EFFICIENCY_MAX: i32 = 100;

// --- ETA ---

/// Simulated minutes for a full route traversal, for the detail dialog's
/// mock ETA: `round((1 - t) * 120)`.
pub const ETA_FULL_ROUTE_MINUTES: f64 = 120.0;

// --- Viewport ---

/// Minimum zoom scale.
pub const ZOOM_MIN: f64 = 0.7;

/// Maximum zoom scale.
pub const ZOOM_MAX: f64 = 3.0;

/// Wheel delta to scale conversion factor.
pub const ZOOM_WHEEL_FACTOR: f64 = 0.001;

// --- Tone cues (Hz / seconds / gain) ---

pub const TONE_FOCUS_HZ: f64 = 1200.0;
pub const TONE_ON_TIME_HZ: f64 = 880.0;
pub const TONE_ARRIVAL_HZ: f64 = 660.0;
pub const TONE_DELAYED_HZ: f64 = 420.0;
pub const TONE_STOPPED_HZ: f64 = 220.0;
pub const TONE_ACTION_HZ: f64 = 990.0;

/// Standard short beep duration.
pub const TONE_SHORT_SECS: f64 = 0.08;

/// Longer beep for critical cues.
pub const TONE_LONG_SECS: f64 = 0.10;

/// Default beep gain.
pub const TONE_GAIN: f64 = 0.04;
