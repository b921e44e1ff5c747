//! Move legality and terminal-state detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{WinLine, check_winner};

use super::position::Position;
use super::types::Board;

/// What a single inspection of the board says about the game.
///
/// Win and draw come out of one call, evaluated in that order, so callers
/// cannot accidentally test for a draw before testing for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A line is complete.
    Win(WinLine),
    /// Board full, no winner.
    Draw,
    /// Play continues.
    Open,
}

/// Evaluates the board: winner first, then draw.
pub fn verdict(board: &Board) -> Verdict {
    if let Some(line) = check_winner(board) {
        Verdict::Win(line)
    } else if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::Open
    }
}

/// The single legality gate for every move, human or computer.
///
/// Takes the external 1-indexed coordinates: true iff both are in `1..=3`
/// and the target square is empty.
pub fn is_valid_move(board: &Board, row: u8, col: u8) -> bool {
    match Position::from_input(row, col) {
        Some(pos) => board.is_empty(pos),
        None => false,
    }
}
