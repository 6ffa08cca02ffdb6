//! Hostile-actor AI for BLASTZONE.
//!
//! Implements the wandering behavior: when an enemy bumps into something it
//! backs off the contact point and picks a fresh cardinal direction.

pub mod wander;

pub use blastzone_core as core;

#[cfg(test)]
mod tests;
