//! Tests for the axis-preferring and squiggly movement policies

#[cfg(test)]
mod tests {
    use fillwalk::algorithm::movement::{MovementPolicy, PolicyKind};
    use fillwalk::spatial::CellId;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn cells(points: &[(i32, i32)]) -> HashSet<CellId> {
        points.iter().map(|&(x, y)| CellId::new(x, y)).collect()
    }

    // Tests the preferred direction wins whenever it is free
    // Verified by always bouncing before checking the preference
    #[test]
    fn test_horizontal_keeps_preferred_direction() {
        let mut rng = StdRng::seed_from_u64(1);
        let valid = cells(&[(2, 1), (0, 1), (1, 2), (1, 0)]);
        let mut policy = MovementPolicy::Horizontal { preferred: 0 };

        let next = policy.next(CellId::new(1, 1), |id| valid.contains(&id), &mut rng);

        assert_eq!(next, Some(CellId::new(2, 1)));
        assert_eq!(policy, MovementPolicy::Horizontal { preferred: 0 });
    }

    // Tests a blocked preference flips to the opposite direction and stays flipped
    // Verified by restoring the preference after the bounce
    #[test]
    fn test_horizontal_bounces_once_and_remembers() {
        let mut rng = StdRng::seed_from_u64(2);
        let valid = cells(&[(0, 1), (1, 2)]);
        let mut policy = MovementPolicy::Horizontal { preferred: 0 };

        let next = policy.next(CellId::new(1, 1), |id| valid.contains(&id), &mut rng);

        assert_eq!(next, Some(CellId::new(0, 1)));
        assert_eq!(policy, MovementPolicy::Horizontal { preferred: 1 });
    }

    #[test]
    fn test_vertical_bounces_on_its_own_axis() {
        let mut rng = StdRng::seed_from_u64(3);
        let valid = cells(&[(1, 2), (2, 1)]);
        let mut policy = MovementPolicy::Vertical { preferred: 3 };

        let next = policy.next(CellId::new(1, 1), |id| valid.contains(&id), &mut rng);

        assert_eq!(next, Some(CellId::new(1, 2)));
        assert_eq!(policy, MovementPolicy::Vertical { preferred: 2 });
    }

    // Tests the fallback only ever returns a currently valid neighbour
    // Verified by choosing among all four candidates in the fallback
    #[test]
    fn test_axis_fallback_returns_member_of_valid_set() {
        let valid = cells(&[(1, 2), (1, 0)]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut policy = MovementPolicy::Horizontal {
                preferred: (seed % 2) as usize,
            };

            let next = policy.next(CellId::new(1, 1), |id| valid.contains(&id), &mut rng);

            assert!(next.is_some_and(|id| valid.contains(&id)));
        }
    }

    #[test]
    fn test_fallback_reaches_both_remaining_neighbours() {
        let valid = cells(&[(1, 2), (1, 0)]);
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut policy = MovementPolicy::Horizontal { preferred: 0 };
            if let Some(id) = policy.next(CellId::new(1, 1), |id| valid.contains(&id), &mut rng) {
                seen.insert(id);
            }
        }

        assert_eq!(seen, valid);
    }

    #[test]
    fn test_boxed_in_returns_none() {
        let mut rng = StdRng::seed_from_u64(4);
        for mut policy in [
            MovementPolicy::Horizontal { preferred: 1 },
            MovementPolicy::Vertical { preferred: 2 },
            MovementPolicy::Squiggly,
        ] {
            assert_eq!(policy.next(CellId::new(0, 0), |_| false, &mut rng), None);
        }
    }

    #[test]
    fn test_squiggly_picks_among_valid() {
        let valid = cells(&[(6, 5), (5, 4)]);
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut policy = MovementPolicy::Squiggly;
            let next = policy.next(CellId::new(5, 5), |id| valid.contains(&id), &mut rng);

            assert!(next.is_some_and(|id| valid.contains(&id)));
            seen.extend(next);
        }

        assert_eq!(seen, valid);
    }

    // Tests flat mode never draws the squiggly policy
    // Verified by ignoring the flat flag
    #[test]
    fn test_flat_choice_excludes_squiggly() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let policy = MovementPolicy::choose(true, &mut rng);
            assert_ne!(policy.kind(), PolicyKind::Squiggly);
        }
    }

    #[test]
    fn test_choice_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(6);
        let kinds: Vec<PolicyKind> = (0..200)
            .map(|_| MovementPolicy::choose(false, &mut rng).kind())
            .collect();

        assert!(kinds.contains(&PolicyKind::Horizontal));
        assert!(kinds.contains(&PolicyKind::Vertical));
        assert!(kinds.contains(&PolicyKind::Squiggly));
    }

    #[test]
    fn test_initial_preference_stays_on_axis() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            match MovementPolicy::with_kind(PolicyKind::Horizontal, &mut rng) {
                MovementPolicy::Horizontal { preferred } => assert!(preferred < 2),
                other => unreachable!("Expected horizontal policy, got {other:?}"),
            }
            match MovementPolicy::with_kind(PolicyKind::Vertical, &mut rng) {
                MovementPolicy::Vertical { preferred } => assert!((2..4).contains(&preferred)),
                other => unreachable!("Expected vertical policy, got {other:?}"),
            }
        }
    }
}
