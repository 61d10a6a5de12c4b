//! Client-side move selection seam.
//!
//! The engine itself never picks moves; human, scripted, or AI frontends
//! implement [`Player`] and drive [`GameModel`] through its public API.

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::game::GameModel;
use rand::Rng;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next move for the side to play, or `None` when the game
    /// is over or the board is full.
    fn select_move<R: Rng>(&mut self, rng: &mut R, game: &GameModel) -> Option<Coord>;
}

/// Player that picks uniformly among the empty cells.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move<R: Rng>(&mut self, rng: &mut R, game: &GameModel) -> Option<Coord> {
        if game.is_terminated() {
            return None;
        }
        let empty: Vec<Coord> = (0..BOARD_SIZE as i16)
            .flat_map(|y| (0..BOARD_SIZE as i16).map(move |x| Coord::new(x, y)))
            .filter(|&at| game.at(at) == Ok(None))
            .collect();
        if empty.is_empty() {
            None
        } else {
            Some(empty[rng.random_range(0..empty.len())])
        }
    }
}
