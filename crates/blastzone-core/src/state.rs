//! Game state snapshot, the read-only view handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::EntityRef;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Bounds, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub outcome: Outcome,
    /// Drawable entities, back to front.
    pub entities: Vec<EntityView>,
    /// `None` once the player has been removed.
    pub player: Option<PlayerView>,
    pub hostiles_remaining: u32,
    pub events: Vec<GameEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityRef,
    pub kind: EntityKind,
    pub bounds: Bounds,
    /// Spritesheet frame for animated entities.
    pub frame: Option<u32>,
    /// Orientation for directional sprites.
    pub facing: Option<Direction>,
}

/// Player status for the HUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub bounds: Bounds,
    pub bombs_outstanding: u32,
    pub max_bombs: u32,
    pub max_range: u32,
}
