//! Simulation engine for BLASTZONE.
//!
//! Owns the hecs ECS world, runs the six systems in fixed order each tick,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod level;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use blastzone_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use level::{LevelError, LevelGrid};
