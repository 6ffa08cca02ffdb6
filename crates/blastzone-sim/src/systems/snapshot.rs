//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use blastzone_core::components::{AnimationState, PlayerStats};
use blastzone_core::enums::{EntityKind, GamePhase};
use blastzone_core::events::GameEvent;
use blastzone_core::state::*;
use blastzone_core::types::{Bounds, SimTime, Velocity};

use crate::session::Session;
use crate::systems::control::outstanding_bombs;
use crate::world_setup::entity_ref;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &Session,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        outcome: session.outcome(),
        entities: build_entities(world),
        player: build_player(world, session),
        hostiles_remaining: session.hostiles.len() as u32,
        events,
    }
}

/// Every drawable entity, back to front, ties broken by id.
fn build_entities(world: &World) -> Vec<EntityView> {
    let mut views: Vec<EntityView> = world
        .query::<(&EntityKind, &Bounds, Option<&AnimationState>, Option<&Velocity>)>()
        .iter()
        .map(|(entity, (kind, bounds, anim, vel))| EntityView {
            id: entity_ref(entity),
            kind: *kind,
            bounds: *bounds,
            frame: anim.map(|a| a.current_frame),
            facing: vel.and_then(|v| v.facing()),
        })
        .collect();

    views.sort_by_key(|v| (v.kind.layer(), v.id));
    views
}

/// Player HUD data, while the player is still in the world.
fn build_player(world: &World, session: &Session) -> Option<PlayerView> {
    let bounds = *world.get::<&Bounds>(session.player).ok()?;
    let stats = *world.get::<&PlayerStats>(session.player).ok()?;
    Some(PlayerView {
        bounds,
        bombs_outstanding: outstanding_bombs(world, entity_ref(session.player)),
        max_bombs: stats.max_bombs,
        max_range: stats.max_range,
    })
}
