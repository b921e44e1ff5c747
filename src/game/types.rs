//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark yet.
    Empty,
    /// Square taken by a mark.
    Taken(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Mutation goes through [`Board::set`] only; callers are expected to have
/// validated the move first (see [`crate::game::rules::is_valid_move`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    ///
    /// Infallible: `Position` cannot name an out-of-range cell. Overwriting
    /// a taken square is a caller contract violation, gated upstream by
    /// [`crate::game::rules::is_valid_move`].
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all empty positions in row-major order.
    ///
    /// The order is fixed so strategy scans are deterministic; which element
    /// a strategy picks is its own business.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Taken(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Who controls seat O for the lifetime of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum GameMode {
    /// Both seats are human.
    #[default]
    Pvp,
    /// Seat O picks uniformly among legal moves.
    Random,
    /// Seat O uses the heuristic strategy.
    Smart,
}

/// Progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        let pos = Position::CENTER;
        board.set(pos, Square::Taken(Mark::X));
        assert_eq!(board.get(pos), Square::Taken(Mark::X));
        assert!(!board.is_empty(pos));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new();
        board.set(Position::CENTER, Square::Taken(Mark::O));
        let open = board.empty_positions();
        assert_eq!(open.len(), 8);
        // Row-major order without the center.
        let expected: Vec<_> = Position::ALL
            .iter()
            .copied()
            .filter(|p| *p != Position::CENTER)
            .collect();
        assert_eq!(open, expected);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Taken(Mark::X));
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_mode_parses_case_insensitive() {
        assert_eq!("pvp".parse::<GameMode>().unwrap(), GameMode::Pvp);
        assert_eq!("SMART".parse::<GameMode>().unwrap(), GameMode::Smart);
        assert_eq!("Random".parse::<GameMode>().unwrap(), GameMode::Random);
        assert!("minimax".parse::<GameMode>().is_err());
    }
}
