//! Collision system: AABB overlap tests against the three live rosters.
//!
//! Every collidable entity (Bounds + DestroyState + CollisionMemory) is
//! checked independently against:
//! 1. the player: any overlap pushes the player back to its last safe
//!    position, and overlap with a hostile actor also kills the player;
//! 2. the blast cells: overlap kills the entity if it is destroyable;
//! 3. the hostile roster: the touched hostile either gets flagged for an AI
//!    redirect or has its velocity reversed, per `HostileContact`.
//!
//! All tests run against positions as they stood at the start of the pass.
//! Effects are buffered and applied afterwards. When several roster members
//! overlap one entity, the first in roster order wins.

use hecs::{Entity, World};
use tracing::debug;

use blastzone_core::components::{AiState, CollisionMemory, DestroyState};
use blastzone_core::enums::{EntityKind, HostileContact};
use blastzone_core::types::{overlaps, Bounds, Velocity};

use crate::session::Session;

/// A roster resolved to the members' current rectangles.
pub type Roster = Vec<(Entity, Bounds)>;

/// First roster member overlapping `bounds`. The subject never collides
/// with itself: identity is checked before the rectangle test.
pub fn first_overlap(subject: Entity, bounds: &Bounds, roster: &[(Entity, Bounds)]) -> Option<Entity> {
    roster
        .iter()
        .find(|(member, rect)| *member != subject && overlaps(bounds, rect))
        .map(|(member, _)| *member)
}

/// Look up the current rectangle of every roster member still in the world.
pub fn resolve_roster(world: &World, members: &[Entity]) -> Roster {
    members
        .iter()
        .filter_map(|&e| world.get::<&Bounds>(e).ok().map(|b| (e, *b)))
        .collect()
}

/// Run the collision system.
pub fn run(world: &mut World, session: &Session, contact: HostileContact) {
    let player_roster = resolve_roster(world, &[session.player]);
    let blast_roster = resolve_roster(world, &session.blast_cells);
    let hostile_roster = resolve_roster(world, &session.hostiles);

    let mut push_back_player = false;
    let mut kill_player = false;
    let mut kills: Vec<Entity> = Vec::new();
    // (hostile, position of whatever it ran into)
    let mut contacts: Vec<(Entity, (i32, i32))> = Vec::new();

    {
        let mut query = world.query::<(&EntityKind, &Bounds, &DestroyState, &CollisionMemory)>();
        for (entity, (kind, bounds, state, _memory)) in query.iter() {
            if first_overlap(entity, bounds, &player_roster).is_some() {
                push_back_player = true;
                if kind.is_hostile() {
                    kill_player = true;
                }
            }

            if state.destroyable && first_overlap(entity, bounds, &blast_roster).is_some() {
                kills.push(entity);
            }

            if let Some(hostile) = first_overlap(entity, bounds, &hostile_roster) {
                if !contacts.iter().any(|(h, _)| *h == hostile) {
                    contacts.push((hostile, (bounds.x, bounds.y)));
                }
            }
        }
    }

    for entity in kills {
        if let Ok(mut state) = world.get::<&mut DestroyState>(entity) {
            state.alive = false;
        }
    }

    if push_back_player {
        roll_back(world, session.player);
    }
    if kill_player {
        if let Ok(mut state) = world.get::<&mut DestroyState>(session.player) {
            state.alive = false;
        }
        debug!("player_caught");
    }

    for (hostile, at) in contacts {
        match contact {
            HostileContact::Redirect => {
                if let Ok(mut ai) = world.get::<&mut AiState>(hostile) {
                    ai.needs_redirect = true;
                    ai.blocked_at = Some(at);
                }
            }
            HostileContact::Reverse => {
                if let Ok(mut vel) = world.get::<&mut Velocity>(hostile) {
                    *vel = vel.reversed();
                }
            }
        }
    }
}

/// Restore an actor's rectangle to its recorded last safe position.
fn roll_back(world: &mut World, entity: Entity) {
    let safe = match world.get::<&CollisionMemory>(entity) {
        Ok(memory) => (memory.last_safe_x, memory.last_safe_y),
        Err(_) => return,
    };
    if let Ok(mut bounds) = world.get::<&mut Bounds>(entity) {
        *bounds = bounds.moved_to(safe.0, safe.1);
    }
}
