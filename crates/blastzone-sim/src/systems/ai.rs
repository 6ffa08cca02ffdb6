//! Hostile-actor AI system.
//!
//! Resolves pending redirects flagged by the collision system through the
//! wander logic in blastzone-ai. Actors without a pending redirect are left
//! alone; movement keeps them drifting.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use blastzone_core::components::AiState;
use blastzone_core::types::{Bounds, Velocity};

use blastzone_ai::wander::{redirect, WanderContext};

/// Run the AI system. `step` is the back-off distance (one grid step).
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, step: i32) {
    for (_entity, (ai, bounds, vel)) in
        world.query_mut::<(&mut AiState, &mut Bounds, &mut Velocity)>()
    {
        if !ai.needs_redirect {
            continue;
        }

        let ctx = WanderContext {
            position: (bounds.x, bounds.y),
            velocity: *vel,
            blocked_at: ai.blocked_at,
            step,
            candidates: &ai.candidate_directions,
        };
        let update = redirect(&ctx, rng);

        debug!(
            from = ?(bounds.x, bounds.y),
            to = ?update.position,
            vx = update.velocity.vx,
            vy = update.velocity.vy,
            "enemy_redirected"
        );

        *bounds = bounds.moved_to(update.position.0, update.position.1);
        *vel = update.velocity;
        ai.needs_redirect = false;
        ai.blocked_at = None;
    }
}
