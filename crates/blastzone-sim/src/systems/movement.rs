//! Kinematic integration system.
//!
//! Records the pre-move position as the rollback target, then applies the
//! velocity. Player-controlled actors stop after each step; AI-controlled
//! actors keep drifting until redirected.

use hecs::World;

use blastzone_core::components::{CollisionMemory, PlayerStats};
use blastzone_core::types::{Bounds, Velocity};

/// Run movement for every actor (Velocity + CollisionMemory + PlayerStats + Bounds).
pub fn run(world: &mut World) {
    for (_entity, (bounds, vel, memory, stats)) in world.query_mut::<(
        &mut Bounds,
        &mut Velocity,
        &mut CollisionMemory,
        &PlayerStats,
    )>() {
        memory.last_safe_x = bounds.x;
        memory.last_safe_y = bounds.y;

        bounds.x += vel.vx;
        bounds.y += vel.vy;

        if !stats.is_ai_controlled {
            *vel = Velocity::ZERO;
        }
    }
}
