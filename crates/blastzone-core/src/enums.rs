//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Cardinal direction on the grid. Screen coordinates: +y is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step (dx, dy) for this direction.
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Entity tag. Systems branch on this instead of inspecting component sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    /// Static background, no gameplay components.
    Tile,
    /// Wall or crate (see `DestroyState::destroyable`).
    Block,
    Bomb,
    BlastCell,
    Enemy,
    Player,
}

impl EntityKind {
    /// Draw order, back to front.
    pub fn layer(self) -> u8 {
        match self {
            EntityKind::Tile => 0,
            EntityKind::Block => 1,
            EntityKind::Bomb => 2,
            EntityKind::BlastCell => 3,
            EntityKind::Enemy => 4,
            EntityKind::Player => 5,
        }
    }

    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::Enemy)
    }
}

/// What happens when a fuse expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuseKind {
    /// Spawn a cross of blast cells reaching `radius` cells from the center.
    Explode { radius: u32 },
    /// Mark the carrier dead.
    SelfDelete,
}

/// A single input event waiting in an actor's mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Move(Direction),
    PlaceBomb,
}

/// Response of the collision system when something touches a hostile actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostileContact {
    /// Flag the actor for the AI system to pick a new direction.
    #[default]
    Redirect,
    /// Reverse the actor's velocity on both axes.
    Reverse,
}

/// Session result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Win,
    Lose,
}

impl Outcome {
    pub fn is_final(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    /// An outcome has been produced; ticks no longer advance.
    Over,
}
