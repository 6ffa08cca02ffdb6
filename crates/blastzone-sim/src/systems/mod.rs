//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the session.
//! Per-tick order: control, movement, collision, timer, ai, destroy.

pub mod ai;
pub mod collision;
pub mod control;
pub mod destroy;
pub mod movement;
pub mod snapshot;
pub mod timer;
