//! Wandering redirect logic.
//!
//! Pure functions over plain data. No ECS dependency; the caller supplies
//! the RNG so runs stay reproducible under a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use blastzone_core::types::Velocity;

/// Input to a redirect decision for a single actor.
pub struct WanderContext<'a> {
    /// Current top-left corner of the actor.
    pub position: (i32, i32),
    pub velocity: Velocity,
    /// Position of the obstacle the actor ran into, if recorded.
    pub blocked_at: Option<(i32, i32)>,
    /// Distance to back off from the obstacle (one grid step).
    pub step: i32,
    /// Velocities to choose the new heading from.
    pub candidates: &'a [(i32, i32)],
}

/// Output of a redirect decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WanderUpdate {
    pub position: (i32, i32),
    pub velocity: Velocity,
}

/// Back the actor off its contact point, then pick a new heading uniformly
/// from the candidates. With no candidates the actor turns around.
pub fn redirect<R: Rng + ?Sized>(ctx: &WanderContext<'_>, rng: &mut R) -> WanderUpdate {
    let position = match ctx.blocked_at {
        Some(contact) => back_off(ctx.position, ctx.velocity, contact, ctx.step),
        None => ctx.position,
    };

    let velocity = match ctx.candidates.choose(rng) {
        Some(&(vx, vy)) => Velocity::new(vx, vy),
        None => ctx.velocity.reversed(),
    };

    WanderUpdate { position, velocity }
}

/// Place the actor one step short of `contact` on each axis it was moving along.
/// Axes without motion keep their current coordinate.
pub fn back_off(
    position: (i32, i32),
    velocity: Velocity,
    contact: (i32, i32),
    step: i32,
) -> (i32, i32) {
    let (mut x, mut y) = position;
    let (cx, cy) = contact;

    if velocity.vx > 0 {
        x = cx - step;
    } else if velocity.vx < 0 {
        x = cx + step;
    }
    if velocity.vy > 0 {
        y = cy - step;
    } else if velocity.vy < 0 {
        y = cy + step;
    }

    (x, y)
}
