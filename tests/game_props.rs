use gomoku::{Color, GameModel, MoveOutcome, Player, RandomPlayer, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Play up to `moves` random legal moves, stopping early if the game ends.
fn random_game(seed: u64, moves: usize) -> GameModel {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = RandomPlayer::new();
    let mut game = GameModel::new();
    for _ in 0..moves {
        let at = match player.select_move(&mut rng, &game) {
            Some(at) => at,
            None => break,
        };
        match game.take_move(at).unwrap() {
            MoveOutcome::Continuing => {}
            MoveOutcome::Terminated(_) => break,
        }
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// History colors strictly alternate starting with black, and the
    /// occupancy bookkeeping stays consistent with the history length.
    #[test]
    fn turn_alternation_and_occupancy(seed in any::<u64>(), moves in 0..120usize) {
        let game = random_game(seed, moves);

        for (i, stone) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Color::Black } else { Color::White };
            prop_assert_eq!(stone.color, expected);
        }
        prop_assert_eq!(game.num_of_empty_places() + game.steps(), BOARD_SIZE * BOARD_SIZE);
        prop_assert_eq!(game.round(), 1 + game.steps() / 2);
    }

    /// Every history entry matches the live board, and both history lookup
    /// shapes agree with the raw log.
    #[test]
    fn board_and_history_lookups_agree(seed in any::<u64>(), moves in 0..120usize) {
        let game = random_game(seed, moves);

        for (i, stone) in game.history().iter().enumerate() {
            prop_assert_eq!(game.at(stone.at).unwrap(), Some(stone.color));
            prop_assert_eq!(game.history_move(i + 1).unwrap(), *stone);
            let round = 1 + i / 2;
            prop_assert_eq!(game.history_move_in_round(round, stone.color).unwrap(), *stone);
        }
        prop_assert!(game.history_move(game.steps() + 1).is_err());
    }

    /// Applying one legal move and retracting it reproduces the previous
    /// state exactly.
    #[test]
    fn undo_is_exact_inverse(seed in any::<u64>(), moves in 0..80usize) {
        let mut game = random_game(seed, moves);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut player = RandomPlayer::new();

        let at = match player.select_move(&mut rng, &game) {
            Some(at) => at,
            None => return Ok(()), // game already over
        };
        let snapshot = game.clone();
        game.take_move(at).unwrap();
        game.cancel_last_move().unwrap();
        prop_assert_eq!(game, snapshot);
    }

    /// Retracting every move walks the game back to its initial state.
    #[test]
    fn undo_all_moves_restores_fresh_game(seed in any::<u64>(), moves in 0..60usize) {
        let mut game = random_game(seed, moves);
        while game.steps() > 0 {
            game.cancel_last_move().unwrap();
        }
        prop_assert_eq!(game, GameModel::new());
    }

    /// Random self-play always reaches a terminal state within one board's
    /// worth of plies, and the winner query is meaningful once it does.
    #[test]
    fn random_self_play_terminates(seed in any::<u64>()) {
        let game = random_game(seed, BOARD_SIZE * BOARD_SIZE);
        prop_assert!(game.is_terminated());
        prop_assert!(game.winner().is_some());
        prop_assert!(game.steps() <= BOARD_SIZE * BOARD_SIZE);
        prop_assert_eq!(game.whose_turn(), None);
    }
}
