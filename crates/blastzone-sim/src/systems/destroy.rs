//! Destroy system: the single point of removal from the world and rosters.
//!
//! Sweeps every entity with `alive == false` and `destroyable == true`,
//! forgets it in the session rosters, despawns it, and then decides the
//! outcome. A dead player means LOSE; an empty hostile roster means WIN.
//! When both happen in the same sweep, LOSE wins.

use hecs::{Entity, World};
use tracing::{debug, info};

use blastzone_core::components::DestroyState;
use blastzone_core::enums::{EntityKind, Outcome};
use blastzone_core::events::GameEvent;

use crate::session::Session;

/// Run the destroy sweep and return the session outcome afterwards.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    session: &mut Session,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> Outcome {
    despawn_buffer.clear();

    for (entity, state) in world.query_mut::<&DestroyState>() {
        if !state.alive && state.destroyable {
            despawn_buffer.push(entity);
        }
    }

    let mut player_died = false;
    for entity in despawn_buffer.drain(..) {
        let kind = world.get::<&EntityKind>(entity).ok().map(|k| *k);
        session.forget(entity);
        if session.is_player(entity) {
            player_died = true;
        }
        // Already-absent entities are ignored.
        if world.despawn(entity).is_ok() {
            if let Some(kind) = kind {
                debug!(?kind, "entity_destroyed");
                events.push(GameEvent::EntityDestroyed { kind });
            }
        }
    }

    let verdict = if player_died {
        Outcome::Lose
    } else if session.hostiles.is_empty() {
        Outcome::Win
    } else {
        Outcome::Ongoing
    };

    if session.conclude(verdict) {
        info!(outcome = ?verdict, "session_ended");
        events.push(GameEvent::SessionEnded { outcome: verdict });
    }

    session.outcome()
}
