//! Control system: turns each actor's pending input into velocity or a bomb.
//!
//! The mailbox is emptied on every pass, so an input is applied exactly once.
//! No input leaves velocity as it was.

use std::collections::HashMap;

use hecs::{Entity, World};
use tracing::debug;

use blastzone_core::components::{ControlInput, DestroyState, EntityRef, PlayerStats};
use blastzone_core::config::GameRules;
use blastzone_core::enums::{EntityKind, InputEvent};
use blastzone_core::events::GameEvent;
use blastzone_core::types::{Bounds, Velocity};

use crate::world_setup::{self, entity_ref};

/// Run the control system for every entity with ControlInput + Velocity + Bounds.
pub fn run(world: &mut World, rules: &GameRules, now_secs: f64, events: &mut Vec<GameEvent>) {
    let mut outstanding = outstanding_bombs_by_owner(world);
    let mut placements: Vec<(Entity, i32, i32, u32)> = Vec::new();

    for (entity, (input, vel, bounds, stats)) in world.query_mut::<(
        &mut ControlInput,
        &mut Velocity,
        &Bounds,
        Option<&PlayerStats>,
    )>() {
        match input.pending.take() {
            Some(InputEvent::Move(direction)) => {
                *vel = Velocity::toward(direction, rules.tile_size);
            }
            Some(InputEvent::PlaceBomb) => {
                let (max_bombs, max_range) = stats
                    .map(|s| (s.max_bombs, s.max_range))
                    .unwrap_or((rules.max_bombs, rules.max_range));
                let count = outstanding.entry(entity_ref(entity)).or_insert(0);
                if *count >= max_bombs {
                    debug!(outstanding = *count, max_bombs, "bomb_budget_exhausted");
                    continue;
                }
                *count += 1;
                let (x, y) = rules.snap_to_cell(bounds.x, bounds.y);
                placements.push((entity, x, y, max_range));
            }
            None => {}
        }
    }

    for (owner, x, y, radius) in placements {
        world_setup::spawn_bomb(world, x, y, owner, radius, now_secs, rules);
        debug!(x, y, radius, "bomb_placed");
        events.push(GameEvent::BombPlaced { x, y });
    }
}

/// Number of live bombs `owner` has on the field.
pub fn outstanding_bombs(world: &World, owner: EntityRef) -> u32 {
    outstanding_bombs_by_owner(world)
        .get(&owner)
        .copied()
        .unwrap_or(0)
}

fn outstanding_bombs_by_owner(world: &World) -> HashMap<EntityRef, u32> {
    let mut counts = HashMap::new();
    let mut query = world.query::<(&EntityKind, &DestroyState)>();
    for (_entity, (kind, state)) in query.iter() {
        if *kind != EntityKind::Bomb || !state.alive {
            continue;
        }
        if let Some(owner) = state.owner {
            *counts.entry(owner).or_insert(0) += 1;
        }
    }
    counts
}
