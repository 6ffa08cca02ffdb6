//! Game loop: feeds scripted input to the engine one tick at a time.
//!
//! Runs until the session produces an outcome or the tick cap is reached.
//! With `realtime` set, ticks are paced at `TICK_RATE`; otherwise the loop
//! runs as fast as the engine allows.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use blastzone_core::commands::PlayerCommand;
use blastzone_core::constants::TICK_RATE;
use blastzone_core::state::GameStateSnapshot;
use blastzone_sim::engine::SimulationEngine;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Hard cap on ticks run. At least one tick always runs.
    pub max_ticks: u64,
    pub realtime: bool,
}

/// Drive `engine` with `script` (one entry per tick, idle once exhausted).
/// Returns the last snapshot produced.
pub fn run(
    engine: &mut SimulationEngine,
    script: &[Option<PlayerCommand>],
    options: &LoopOptions,
) -> GameStateSnapshot {
    let mut next_tick_time = Instant::now();
    let mut ticks: u64 = 0;

    loop {
        if let Some(Some(command)) = script.get(ticks as usize) {
            engine.queue_command(*command);
        }

        let snapshot = engine.tick();
        ticks += 1;

        for event in &snapshot.events {
            debug!(tick = snapshot.time.tick, ?event, "game_event");
        }

        if snapshot.outcome.is_final() {
            info!(outcome = ?snapshot.outcome, ticks, "outcome_reached");
            return snapshot;
        }
        if ticks >= options.max_ticks {
            info!(ticks, hostiles_remaining = snapshot.hostiles_remaining, "tick_limit_reached");
            return snapshot;
        }

        if options.realtime {
            pace(&mut next_tick_time);
        }
    }
}

/// Sleep until the next tick is due.
fn pace(next_tick_time: &mut Instant) {
    *next_tick_time += TICK_DURATION;
    let now = Instant::now();
    if *next_tick_time > now {
        std::thread::sleep(*next_tick_time - now);
    } else if now - *next_tick_time > TICK_DURATION * 2 {
        // Too far behind; reset to avoid a catch-up spiral
        *next_tick_time = now;
    }
}
