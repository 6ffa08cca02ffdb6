//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A bomb was dropped at (x, y).
    BombPlaced { x: i32, y: i32 },
    /// A bomb's fuse ran out and spawned `cells` blast cells.
    BombExploded { x: i32, y: i32, cells: u32 },
    /// An entity was swept from the world.
    EntityDestroyed { kind: EntityKind },
    /// The session produced its outcome.
    SessionEnded { outcome: Outcome },
}
