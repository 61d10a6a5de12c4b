//! Core rules engine: move application, win/tie detection, undo, queries.

use crate::common::{Color, GameError, MoveOutcome, RuleVerdict, Stone, Winner};
use crate::config::{BOARD_SIZE, DIRECTIONS, FIRST_PLAYER, WIN_LENGTH};
use crate::coord::Coord;
use crate::grid::Grid;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Grid type used for game state tracking.
type Cells = Grid<BOARD_SIZE>;

/// Authoritative game state: board occupancy, move history, termination.
///
/// Turn, round, and step counters are derived from the history so that undo
/// restores them exactly. Termination is stored, together with the step that
/// caused it, so undoing a winning move reopens the game while a game ended
/// by an external [`end_game`](GameModel::end_game) call stays closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    grid: Cells,
    history: Vec<Stone>,
    terminated: bool,
    winner: Option<Winner>,
    terminal_step: Option<usize>,
}

impl GameModel {
    /// Create a fresh game: empty board, black to move, round 1.
    pub fn new() -> Self {
        Self {
            grid: Cells::new(),
            history: Vec::new(),
            terminated: false,
            winner: None,
            terminal_step: None,
        }
    }

    /// Color that would place the next stone.
    fn to_move(&self) -> Color {
        match self.history.last() {
            Some(stone) => stone.color.opponent(),
            None => FIRST_PLAYER,
        }
    }

    /// Length of the same-color run extending from `from` along `dir`,
    /// excluding `from` itself. Stops at the board edge or the first cell
    /// that is empty or differently colored.
    fn run_length(&self, from: Coord, dir: Coord, color: Color) -> usize {
        let mut len = 0;
        let mut probe = from + dir;
        while self.grid.get(probe) == Ok(Some(color)) {
            len += 1;
            probe += dir;
        }
        len
    }

    /// Evaluate what placing the current player's stone at `at` would
    /// produce, without mutating any state.
    ///
    /// The candidate cell must be on the board and empty; `take_move` uses
    /// the same call as its legality check before placing, so pre-check and
    /// post-move outcome cannot disagree.
    pub fn check_rule(&self, at: Coord) -> Result<RuleVerdict, GameError> {
        if self.grid.get(at)?.is_some() {
            return Err(GameError::Occupied { at });
        }
        let color = self.to_move();
        for dir in DIRECTIONS {
            let run = 1 + self.run_length(at, dir, color) + self.run_length(at, -dir, color);
            if run >= WIN_LENGTH {
                return Ok(RuleVerdict::Win(color));
            }
        }
        if self.num_of_empty_places() == 1 {
            return Ok(RuleVerdict::Tie);
        }
        Ok(RuleVerdict::Continuing)
    }

    /// Apply a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// `GameOver` once terminated, `Grid(OutOfBounds)` off the board,
    /// `Occupied` when the cell holds a stone. No state changes on error.
    pub fn take_move(&mut self, at: Coord) -> Result<MoveOutcome, GameError> {
        if self.terminated {
            return Err(GameError::GameOver);
        }
        let verdict = self.check_rule(at)?;
        let color = self.to_move();
        self.grid.set(at, color)?;
        self.history.push(Stone::new(at, color));
        match verdict {
            RuleVerdict::Win(color) => {
                let winner = Winner::from(color);
                if self.end_game(winner) {
                    self.terminal_step = Some(self.history.len());
                }
                Ok(MoveOutcome::Terminated(winner))
            }
            RuleVerdict::Tie => {
                if self.end_game(Winner::Tie) {
                    self.terminal_step = Some(self.history.len());
                }
                Ok(MoveOutcome::Terminated(Winner::Tie))
            }
            RuleVerdict::Continuing => Ok(MoveOutcome::Continuing),
        }
    }

    /// Convenience overload of [`take_move`](GameModel::take_move) taking
    /// raw x/y integers.
    pub fn take_move_at(&mut self, x: i16, y: i16) -> Result<MoveOutcome, GameError> {
        self.take_move(Coord::new(x, y))
    }

    /// End the game with `winner`. Returns `true` if the state changed;
    /// calling it on an already terminated game ignores the argument and
    /// returns `false`.
    pub fn end_game(&mut self, winner: Winner) -> bool {
        if self.terminated {
            return false;
        }
        self.terminated = true;
        self.winner = Some(winner);
        true
    }

    /// Retract the most recent move and return it.
    ///
    /// Exactly one ply per call. Turn and round revert with the history; if
    /// the undone move itself terminated the game, termination and winner
    /// are cleared.
    ///
    /// # Errors
    ///
    /// `EmptyHistory` when no move has been made.
    pub fn cancel_last_move(&mut self) -> Result<Stone, GameError> {
        let stone = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.grid.clear(stone.at)?;
        if self.terminal_step == Some(self.history.len() + 1) {
            self.terminal_step = None;
            self.terminated = false;
            self.winner = None;
        }
        Ok(stone)
    }

    /// Cell contents at `at`: `None` for an empty intersection.
    ///
    /// # Errors
    ///
    /// `Grid(OutOfBounds)` when the coordinate is off the board.
    pub fn at(&self, at: Coord) -> Result<Option<Color>, GameError> {
        Ok(self.grid.get(at)?)
    }

    /// The `step`th accepted move, 1-indexed.
    pub fn history_move(&self, step: usize) -> Result<Stone, GameError> {
        step.checked_sub(1)
            .and_then(|i| self.history.get(i))
            .copied()
            .ok_or(GameError::OutOfRange)
    }

    /// The move `color` made in `round` (1-indexed), or `OutOfRange` if that
    /// round/color combination has not been played yet.
    pub fn history_move_in_round(&self, round: usize, color: Color) -> Result<Stone, GameError> {
        let offset = if self.is_first_player(color) { 0 } else { 1 };
        round
            .checked_sub(1)
            .and_then(|r| r.checked_mul(2))
            .and_then(|i| i.checked_add(offset))
            .and_then(|i| self.history.get(i))
            .copied()
            .ok_or(GameError::OutOfRange)
    }

    /// The most recent move.
    pub fn last_move(&self) -> Result<Stone, GameError> {
        self.history.last().copied().ok_or(GameError::EmptyHistory)
    }

    /// All accepted moves in chronological order.
    pub fn history(&self) -> &[Stone] {
        &self.history
    }

    /// Whether `color` is the side that opens every game.
    pub fn is_first_player(&self, color: Color) -> bool {
        color == FIRST_PLAYER
    }

    /// Color to move next, or `None` once the game has terminated.
    pub fn whose_turn(&self) -> Option<Color> {
        if self.terminated {
            None
        } else {
            Some(self.to_move())
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Meaningful only once terminated; `None` while the game runs.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Current round, starting at 1 and incrementing after each completed
    /// black+white pair. Never drops below 1, including across undo.
    pub fn round(&self) -> usize {
        1 + self.history.len() / 2
    }

    /// Number of plies accepted so far.
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty_board(&self) -> bool {
        self.history.is_empty()
    }

    pub fn num_of_empty_places(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.history.len()
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameModel {
    /// Board snapshot: columns lettered, rows numbered, `X` black, `O`
    /// white, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            let ch = (b'A' + x as u8) as char;
            write!(f, " {}", ch)?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{:2} ", y + 1)?;
            for x in 0..BOARD_SIZE {
                let glyph = match self.grid.get(Coord::new(x as i16, y as i16)) {
                    Ok(Some(Color::Black)) => 'X',
                    Ok(Some(Color::White)) => 'O',
                    _ => '.',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
