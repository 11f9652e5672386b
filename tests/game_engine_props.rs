use aviones::{
    choose_shot, ComputerMove, GameConfig, GameEngine, ShotOutcome, Side, TurnState, ViewCell,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Count of non-empty cells in each side's view must match its accepted shots.
fn shots_match(engine: &GameEngine, player: usize, computer: usize) -> bool {
    engine.view_grid(Side::Player).shots() == player
        && engine.view_grid(Side::Computer).shots() == computer
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Play whole games, checking the turn rule after every shot.
    #[test]
    fn hit_continuation_holds(seed in any::<u64>(), size in 6usize..=10) {
        let config = GameConfig::with_size(size);
        let mut engine = GameEngine::new(&config, SmallRng::seed_from_u64(seed)).unwrap();
        let mut player_rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let (mut player_shots, mut computer_shots) = (0, 0);

        while !engine.turn_state().is_terminal() {
            let before = engine.turn_state();
            let report = match before {
                TurnState::PlayerTurn => {
                    // occasionally retry an old coordinate
                    let (r, c) = if player_shots > 0 && player_rng.random_bool(0.2) {
                        engine.view_grid(Side::Player).iter()
                            .find(|&(_, _, cell)| cell != ViewCell::Empty)
                            .map(|(r, c, _)| (r, c))
                            .unwrap()
                    } else {
                        choose_shot(engine.view_grid(Side::Player), &mut player_rng).unwrap()
                    };
                    engine.submit_player_shot(r, c).unwrap()
                }
                TurnState::ComputerTurn => match engine.computer_step().unwrap() {
                    ComputerMove::Shot(report) => report,
                    ComputerMove::NoCandidate => break,
                },
                _ => unreachable!(),
            };
            let shooter = before.active_side().unwrap();

            match report.outcome {
                ShotOutcome::AlreadyShot => {
                    prop_assert_eq!(shooter, Side::Player);
                    prop_assert_eq!(report.turn_state, before);
                }
                ShotOutcome::Hit => {
                    match shooter {
                        Side::Player => player_shots += 1,
                        Side::Computer => computer_shots += 1,
                    }
                    if engine.fleet_grid(shooter.opponent()).is_sunk() {
                        prop_assert!(report.turn_state.is_terminal());
                    } else {
                        prop_assert_eq!(report.turn_state, before);
                    }
                }
                ShotOutcome::Miss => {
                    match shooter {
                        Side::Player => player_shots += 1,
                        Side::Computer => computer_shots += 1,
                    }
                    prop_assert_ne!(report.turn_state, before);
                    prop_assert_eq!(report.turn_state.active_side(), Some(shooter.opponent()));
                }
            }
            prop_assert_eq!(engine.turn_state(), report.turn_state);
            prop_assert!(shots_match(&engine, player_shots, computer_shots));
        }

        match engine.turn_state() {
            TurnState::PlayerWon => {
                prop_assert!(engine.fleet_grid(Side::Computer).is_sunk());
                prop_assert!(!engine.fleet_grid(Side::Player).is_sunk());
            }
            TurnState::ComputerWon => {
                prop_assert!(engine.fleet_grid(Side::Player).is_sunk());
                prop_assert!(!engine.fleet_grid(Side::Computer).is_sunk());
            }
            other => prop_assert!(false, "unexpected end state {:?}", other),
        }
        prop_assert!(engine.submit_player_shot(0, 0).is_err());
        prop_assert!(engine.computer_step().is_err());
    }

    /// Every view cell is set exactly where the owner has shot.
    #[test]
    fn views_mirror_fleets(seed in any::<u64>(), shots in 1usize..40) {
        let mut engine = GameEngine::seeded(seed).unwrap();
        let mut player_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..shots {
            match engine.turn_state() {
                TurnState::PlayerTurn => {
                    let (r, c) = choose_shot(engine.view_grid(Side::Player), &mut player_rng).unwrap();
                    engine.submit_player_shot(r, c).unwrap();
                }
                TurnState::ComputerTurn => {
                    engine.computer_step().unwrap();
                }
                _ => break,
            }
        }
        let state = engine.state();
        // from_state re-validates fleet/view agreement
        prop_assert!(GameEngine::from_state(state, SmallRng::seed_from_u64(0)).is_ok());
    }
}
