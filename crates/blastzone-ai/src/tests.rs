#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use blastzone_core::types::Velocity;

    use crate::wander::{back_off, redirect, WanderContext};

    const STEP: i32 = 65;
    const CARDINAL: [(i32, i32); 4] = [(0, -3), (0, 3), (-3, 0), (3, 0)];

    fn make_context(velocity: Velocity, blocked_at: Option<(i32, i32)>) -> WanderContext<'static> {
        WanderContext {
            position: (118, 50),
            velocity,
            blocked_at,
            step: STEP,
            candidates: &CARDINAL,
        }
    }

    #[test]
    fn test_back_off_moving_right() {
        // Wall at x=180; actor drifted into it heading east.
        let pos = back_off((118, 50), Velocity::new(3, 0), (180, 50), STEP);
        assert_eq!(pos, (115, 50), "Should sit one step left of the wall");
    }

    #[test]
    fn test_back_off_moving_up() {
        let pos = back_off((50, 113), Velocity::new(0, -3), (50, 50), STEP);
        assert_eq!(pos, (50, 115), "Should sit one step below the obstacle");
    }

    #[test]
    fn test_back_off_stationary_keeps_position() {
        let pos = back_off((77, 88), Velocity::ZERO, (50, 50), STEP);
        assert_eq!(pos, (77, 88));
    }

    #[test]
    fn test_redirect_picks_cardinal_candidate() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ctx = make_context(Velocity::new(3, 0), Some((180, 50)));
        for _ in 0..50 {
            let update = redirect(&ctx, &mut rng);
            assert_eq!(update.position, (115, 50));
            assert!(
                CARDINAL.contains(&(update.velocity.vx, update.velocity.vy)),
                "Unexpected heading {:?}",
                update.velocity
            );
        }
    }

    #[test]
    fn test_redirect_covers_all_directions() {
        // Uniform choice over 4 candidates: 200 draws should hit each one.
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let ctx = make_context(Velocity::new(0, 3), None);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = redirect(&ctx, &mut rng).velocity;
            let idx = CARDINAL.iter().position(|&c| c == (v.vx, v.vy)).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "All four directions should appear");
    }

    #[test]
    fn test_redirect_without_contact_keeps_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ctx = make_context(Velocity::new(-3, 0), None);
        assert_eq!(redirect(&ctx, &mut rng).position, (118, 50));
    }

    #[test]
    fn test_redirect_without_candidates_turns_around() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ctx = WanderContext {
            candidates: &[],
            ..make_context(Velocity::new(3, 0), Some((180, 50)))
        };
        let update = redirect(&ctx, &mut rng);
        assert_eq!(update.velocity, Velocity::new(-3, 0));
    }

    #[test]
    fn test_redirect_deterministic_for_seed() {
        let ctx = make_context(Velocity::new(3, 0), Some((180, 50)));
        let mut a = ChaCha8Rng::seed_from_u64(2024);
        let mut b = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..20 {
            assert_eq!(redirect(&ctx, &mut a), redirect(&ctx, &mut b));
        }
    }
}
