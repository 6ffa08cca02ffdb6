//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Opaque, serializable handle to an entity (the ECS id packed into 64 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef(pub u64);

/// Position to roll back to after an illegal overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionMemory {
    pub last_safe_x: i32,
    pub last_safe_y: i32,
}

/// Pending-removal flag. Every gameplay entity carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyState {
    pub alive: bool,
    /// Indestructible walls are `false` and never swept.
    pub destroyable: bool,
    /// Entity that caused this one to exist (the player for a bomb).
    pub owner: Option<EntityRef>,
}

/// Countdown before a scripted effect fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuseTimer {
    /// Simulation time at which the fuse was lit.
    pub start_secs: f64,
    /// Fires on the first tick where elapsed time exceeds this.
    pub delta_secs: f64,
    pub kind: FuseKind,
}

/// Movement/attack budget for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_bombs: u32,
    pub max_range: u32,
    pub is_ai_controlled: bool,
}

/// Single-slot input mailbox, consumed once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub pending: Option<InputEvent>,
}

/// Hostile-actor wandering state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiState {
    /// Velocities the actor may pick from when redirected.
    pub candidate_directions: Vec<(i32, i32)>,
    pub needs_redirect: bool,
    /// Position of the obstacle that triggered the redirect.
    pub blocked_at: Option<(i32, i32)>,
}

/// Spritesheet playback cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub current_frame: u32,
    pub frame_count: u32,
    /// Simulation time of the last frame advance.
    pub previous_secs: f64,
    pub frame_delta_secs: f64,
}

// Bounds and Velocity are defined in types.rs but used as ECS components too.
