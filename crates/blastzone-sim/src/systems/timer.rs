//! Timer system: advances fuses and fires their effects.
//!
//! Elapsed time is measured in simulation seconds from the moment the fuse
//! was lit. A fuse fires on the first pass where elapsed time exceeds its
//! delta: `SelfDelete` marks the carrier dead, `Explode` marks the bomb dead
//! and spawns a cross of blast cells in the same pass.

use hecs::World;
use tracing::debug;

use blastzone_core::components::{AnimationState, DestroyState, EntityRef, FuseTimer};
use blastzone_core::config::GameRules;
use blastzone_core::enums::{Direction, FuseKind};
use blastzone_core::events::GameEvent;
use blastzone_core::types::Bounds;

use crate::session::Session;
use crate::world_setup;

/// Tolerance for tick-derived times that should compare equal.
const TIME_EPSILON: f64 = 1e-9;

/// Whether a fuse lit at `start_secs` with `delta_secs` has run out at `now_secs`.
pub fn is_expired(fuse: &FuseTimer, now_secs: f64) -> bool {
    now_secs - fuse.start_secs > fuse.delta_secs + TIME_EPSILON
}

/// Top-left corners of the blast cells for a bomb at `center`: the center
/// cell, then each ring outward in Up, Down, Left, Right order.
pub fn blast_pattern(center: (i32, i32), radius: u32, step: i32) -> Vec<(i32, i32)> {
    let (cx, cy) = center;
    let mut cells = Vec::with_capacity(1 + 4 * radius as usize);
    cells.push(center);
    for r in 1..=radius as i32 {
        for direction in Direction::ALL {
            let (dx, dy) = direction.unit();
            cells.push((cx + dx * r * step, cy + dy * r * step));
        }
    }
    cells
}

/// Run the timer system: fire expired fuses, then advance animations.
pub fn run(
    world: &mut World,
    session: &mut Session,
    rules: &GameRules,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut detonations: Vec<((i32, i32), u32, Option<EntityRef>)> = Vec::new();

    for (_entity, (fuse, state, bounds)) in
        world.query_mut::<(&FuseTimer, &mut DestroyState, &Bounds)>()
    {
        if !state.alive || !is_expired(fuse, now_secs) {
            continue;
        }
        state.alive = false;
        if let FuseKind::Explode { radius } = fuse.kind {
            detonations.push(((bounds.x, bounds.y), radius, state.owner));
        }
    }

    for (center, radius, owner) in detonations {
        let cells = blast_pattern(center, radius, rules.tile_size);
        for &(x, y) in &cells {
            let cell = world_setup::spawn_blast_cell(world, x, y, owner, now_secs, rules);
            session.blast_cells.push(cell);
        }
        debug!(x = center.0, y = center.1, radius, cells = cells.len(), "bomb_exploded");
        events.push(GameEvent::BombExploded {
            x: center.0,
            y: center.1,
            cells: cells.len() as u32,
        });
    }

    animate(world, now_secs);
}

/// Advance spritesheet cursors by at most one frame per pass, holding on
/// the last frame.
pub fn animate(world: &mut World, now_secs: f64) {
    for (_entity, anim) in world.query_mut::<&mut AnimationState>() {
        if now_secs - anim.previous_secs <= anim.frame_delta_secs + TIME_EPSILON {
            continue;
        }
        let last = anim.frame_count.saturating_sub(1);
        anim.current_frame = (anim.current_frame + 1).min(last);
        anim.previous_secs = now_secs;
    }
}
