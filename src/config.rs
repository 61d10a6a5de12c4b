use crate::common::Color;
use crate::coord::Coord;

/// Board edge length; the grid is `BOARD_SIZE` × `BOARD_SIZE`.
pub const BOARD_SIZE: usize = 15;

/// Run length that wins the game.
pub const WIN_LENGTH: usize = 5;

/// Color that moves first.
pub const FIRST_PLAYER: Color = Color::Black;

/// The four scan directions: along x, along y, diagonal, anti-diagonal.
/// Each run is counted toward the vector and its negation.
pub const DIRECTIONS: [Coord; 4] = [
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(1, 1),
    Coord::new(1, -1),
];
