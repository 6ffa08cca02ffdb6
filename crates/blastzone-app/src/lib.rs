//! BLASTZONE host application.
//!
//! Wires the simulation crates to a command-line front end: argument
//! parsing, the paced game loop, and structured logging of the session.

pub mod cli;
pub mod game_loop;

pub use blastzone_core as core;
pub use cli::AppError;
