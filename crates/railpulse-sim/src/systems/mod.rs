//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! in the engine's bookkeeping passed in by reference.

pub mod arrivals;
pub mod dispatch;
pub mod feeds;
pub mod ghosts;
pub mod movement;
pub mod snapshot;
