#![cfg(feature = "std")]

use crate::game::GameModel;

/// Print the board followed by a one-line status: the side to move while the
/// game runs, the result once it has terminated.
pub fn print_game(game: &GameModel) {
    println!("{}", game);
    match game.winner() {
        Some(winner) => println!("Result: {}", winner),
        None => {
            if let Some(turn) = game.whose_turn() {
                println!(
                    "Round {}, step {}, {} to move",
                    game.round(),
                    game.steps(),
                    turn
                );
            }
        }
    }
}
