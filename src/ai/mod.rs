//! Computer move selection.

mod heuristic;
mod random;

pub use heuristic::Heuristic;
pub use random::Random;

use crate::game::rules::check_winner;
use crate::game::{Board, Mark, Position, Square};

/// A move-selection policy for a computer seat.
///
/// Strategies are handed the current board and answer synchronously.
/// `None` means no legal move exists; the session never asks in that case,
/// since a full board is already terminal.
pub trait Strategy {
    /// Picks a position on the given board.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Finds the first empty cell, in row-major order, where placing `mark`
/// completes a line.
///
/// Probes a copy of the board, so the caller's board is untouched.
pub(crate) fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    for pos in board.empty_positions() {
        let mut probe = *board;
        probe.set(pos, Square::Taken(mark));
        if check_winner(&probe).is_some_and(|line| line.mark == mark) {
            return Some(pos);
        }
    }
    None
}
