//! Session state: the player reference, the rosters, and the outcome.
//!
//! Stored in `SimulationEngine` alongside the ECS world, NOT as components.
//! The destroy sweep is the only code that shrinks the rosters.

use hecs::Entity;

use blastzone_core::enums::Outcome;

/// Live session bookkeeping.
#[derive(Debug, Clone)]
pub struct Session {
    /// The player entity. May be absent from the world after a loss.
    pub player: Entity,
    /// Hostile actors still alive, in spawn order.
    pub hostiles: Vec<Entity>,
    /// Blast cells currently on the field, in spawn order.
    pub blast_cells: Vec<Entity>,
    outcome: Outcome,
}

impl Session {
    pub fn new(player: Entity, hostiles: Vec<Entity>) -> Self {
        Self {
            player,
            hostiles,
            blast_cells: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Record the session result. Only the first call has any effect;
    /// returns whether this call set it.
    pub fn conclude(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_final() || !outcome.is_final() {
            return false;
        }
        self.outcome = outcome;
        true
    }

    /// Drop `entity` from every roster it belongs to.
    pub fn forget(&mut self, entity: Entity) {
        self.hostiles.retain(|&e| e != entity);
        self.blast_cells.retain(|&e| e != entity);
    }

    pub fn is_player(&self, entity: Entity) -> bool {
        self.player == entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conclude_only_once() {
        let mut world = hecs::World::new();
        let player = world.spawn((0u8,));
        let mut session = Session::new(player, Vec::new());

        assert!(!session.conclude(Outcome::Ongoing));
        assert_eq!(session.outcome(), Outcome::Ongoing);

        assert!(session.conclude(Outcome::Win));
        assert!(!session.conclude(Outcome::Lose));
        assert_eq!(session.outcome(), Outcome::Win);
    }

    #[test]
    fn test_forget_removes_from_rosters() {
        let mut world = hecs::World::new();
        let player = world.spawn((0u8,));
        let enemy = world.spawn((1u8,));
        let blast = world.spawn((2u8,));
        let mut session = Session::new(player, vec![enemy]);
        session.blast_cells.push(blast);

        session.forget(enemy);
        session.forget(blast);
        session.forget(blast);

        assert!(session.hostiles.is_empty());
        assert!(session.blast_cells.is_empty());
        assert!(session.is_player(player));
    }
}
