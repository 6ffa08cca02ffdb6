//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session, applies player
//! commands, runs the six systems in fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::path::Path;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use blastzone_core::commands::PlayerCommand;
use blastzone_core::components::ControlInput;
use blastzone_core::config::GameRules;
use blastzone_core::enums::{GamePhase, Outcome};
use blastzone_core::events::GameEvent;
use blastzone_core::state::GameStateSnapshot;
use blastzone_core::types::SimTime;

use crate::level::{LevelError, LevelGrid};
use crate::session::Session;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: GameRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: GameRules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    session: Session,
    time: SimTime,
    phase: GamePhase,
    rules: GameRules,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Build an engine around an already populated world.
    pub fn with_world(world: World, session: Session, config: SimConfig) -> Self {
        Self {
            world,
            session,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rules: config.rules,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create an engine with the level's entities spawned.
    pub fn from_level(grid: &LevelGrid, config: SimConfig) -> Self {
        let mut world = World::new();
        let session = world_setup::populate(&mut world, grid, &config.rules);
        Self::with_world(world, session, config)
    }

    /// Parse level text and create an engine from it.
    pub fn from_level_str(text: &str, config: SimConfig) -> Result<Self, LevelError> {
        let grid = LevelGrid::parse(text)?;
        Ok(Self::from_level(&grid, config))
    }

    /// Load a level file and create an engine from it.
    pub fn load(path: &Path, config: SimConfig) -> Result<Self, LevelError> {
        let grid = LevelGrid::load(path)?;
        info!(path = %path.display(), "level_loaded");
        Ok(Self::from_level(&grid, config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// Once an outcome is set, ticks no longer advance the simulation.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let outcome = self.run_systems();
            self.time.advance();
            if outcome.is_final() {
                self.phase = GamePhase::Over;
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.session, events)
    }

    /// Get the session outcome.
    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for test setup.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable session access for test setup.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::Over {
            warn!(?command, "command_ignored_after_outcome");
            return;
        }

        match command {
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Move { .. } | PlayerCommand::PlaceBomb => {
                let Some(event) = command.input_event() else {
                    return;
                };
                // Newer input overwrites an unconsumed one.
                match self.world.get::<&mut ControlInput>(self.session.player) {
                    Ok(mut input) => input.pending = Some(event),
                    Err(_) => debug!(?command, "no_player_for_input"),
                }
            }
        }
    }

    /// Run all systems in order. Returns the outcome after the destroy sweep.
    fn run_systems(&mut self) -> Outcome {
        let now = self.time.elapsed_secs;

        // 1. Input -> velocity / bomb placement
        systems::control::run(&mut self.world, &self.rules, now, &mut self.events);
        // 2. Position integration
        systems::movement::run(&mut self.world);
        // 3. Overlap checks against player, blast cells, hostiles
        systems::collision::run(&mut self.world, &self.session, self.rules.hostile_contact);
        // 4. Fuses (may spawn blast cells)
        systems::timer::run(
            &mut self.world,
            &mut self.session,
            &self.rules,
            now,
            &mut self.events,
        );
        // 5. Enemy redirects
        systems::ai::run(&mut self.world, &mut self.rng, self.rules.tile_size);
        // 6. Sweep the dead, decide the outcome
        systems::destroy::run(
            &mut self.world,
            &mut self.session,
            &mut self.despawn_buffer,
            &mut self.events,
        )
    }
}
