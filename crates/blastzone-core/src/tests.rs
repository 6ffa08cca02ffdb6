#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, GameRules};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{overlaps, Bounds, SimTime, Velocity};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move {
                direction: Direction::Left,
            },
            PlayerCommand::PlaceBomb,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_player_command_wire_format() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Move","direction":"Up"}"#).unwrap();
        assert_eq!(
            cmd.input_event(),
            Some(InputEvent::Move(Direction::Up)),
            "Move should map onto the mailbox"
        );
        assert_eq!(PlayerCommand::Pause.input_event(), None);
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::BombExploded {
            x: 115,
            y: 50,
            cells: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"BombExploded\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.outcome, Outcome::Ongoing);
        assert_eq!(back.phase, GamePhase::Active);
    }

    // ---- Geometry ----

    #[test]
    fn test_overlap_basic() {
        let a = Bounds::new(0, 0, 10, 10);
        let b = Bounds::new(5, 5, 10, 10);
        assert!(overlaps(&a, &b));

        let far = Bounds::new(20, 20, 10, 10);
        assert!(!overlaps(&a, &far));
    }

    #[test]
    fn test_overlap_shared_edge_is_not_overlap() {
        let a = Bounds::cell(50, 50, 65);
        let right = Bounds::cell(115, 50, 65);
        let below = Bounds::cell(50, 115, 65);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
        // One unit of penetration is enough.
        assert!(overlaps(&a, &right.offset(-1, 0)));
    }

    #[test]
    fn test_overlap_symmetry() {
        let rects = [
            Bounds::new(0, 0, 10, 10),
            Bounds::new(5, 5, 10, 10),
            Bounds::new(10, 0, 10, 10),
            Bounds::new(-3, 8, 4, 4),
            Bounds::new(2, 2, 1, 1),
            Bounds::new(100, 100, 65, 65),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Bounds::new(0, 0, 100, 100);
        let inner = Bounds::new(40, 40, 5, 5);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_velocity_toward_and_facing() {
        let v = Velocity::toward(Direction::Up, 65);
        assert_eq!(v, Velocity::new(0, -65));
        assert_eq!(v.facing(), Some(Direction::Up));
        assert_eq!(v.reversed().facing(), Some(Direction::Down));
        assert_eq!(Velocity::ZERO.facing(), None);
        assert_eq!(Velocity::new(3, 3).facing(), Some(Direction::Right));
    }

    /// Elapsed time is derived from the tick count and does not drift.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..200 {
            time.advance();
        }
        assert_eq!(time.tick, 200);
        // 200 ticks at 100Hz = 2 seconds
        assert!((time.elapsed_secs - 2.0).abs() < 1e-12);
    }

    // ---- Rules ----

    #[test]
    fn test_rules_partial_json_uses_defaults() {
        let rules = GameRules::from_json_str(r#"{"max_bombs": 1, "hostile_contact": "Reverse"}"#)
            .unwrap();
        assert_eq!(rules.max_bombs, 1);
        assert_eq!(rules.hostile_contact, HostileContact::Reverse);
        assert_eq!(rules.tile_size, GameRules::default().tile_size);
        assert_eq!(rules.enemy_spawn_pattern, vec![(3, 0), (0, 3)]);
    }

    #[test]
    fn test_rules_rejects_bad_values() {
        let err = GameRules::from_json_str(r#"{"tile_size": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameRules::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rules_spawn_pattern_cycles() {
        let rules = GameRules::default();
        assert_eq!(rules.enemy_spawn_velocity(0), (3, 0));
        assert_eq!(rules.enemy_spawn_velocity(1), (0, 3));
        assert_eq!(rules.enemy_spawn_velocity(6), (3, 0));

        let empty = GameRules {
            enemy_spawn_pattern: Vec::new(),
            ..GameRules::default()
        };
        assert_eq!(empty.enemy_spawn_velocity(4), (3, 0));
    }

    #[test]
    fn test_snap_to_cell() {
        let rules = GameRules::default();
        assert_eq!(rules.snap_to_cell(50, 50), (50, 50));
        assert_eq!(rules.snap_to_cell(118, 50), (115, 50));
        assert_eq!(rules.snap_to_cell(50, 170), (50, 180));
    }

    #[test]
    fn test_enemy_directions_are_cardinal() {
        let dirs = GameRules::default().enemy_directions();
        assert_eq!(dirs.len(), 4);
        assert!(dirs.contains(&(0, -3)));
        assert!(dirs.contains(&(3, 0)));
        assert!(dirs.iter().all(|&(dx, dy)| (dx == 0) != (dy == 0)));
    }
}
