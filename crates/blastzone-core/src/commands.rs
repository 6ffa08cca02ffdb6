//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Step one cell in a direction.
    Move { direction: Direction },
    /// Drop a bomb on the player's cell.
    PlaceBomb,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

impl PlayerCommand {
    /// The mailbox event this command delivers, if it is gameplay input.
    pub fn input_event(self) -> Option<InputEvent> {
        match self {
            PlayerCommand::Move { direction } => Some(InputEvent::Move(direction)),
            PlayerCommand::PlaceBomb => Some(InputEvent::PlaceBomb),
            PlayerCommand::Pause | PlayerCommand::Resume => None,
        }
    }
}
