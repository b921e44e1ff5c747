//! Draw detection.

use super::super::types::Board;
use super::win::check_winner;

/// Checks whether the game is drawn: every square taken and no winner.
///
/// The winner check runs inside this call, so a caller cannot observe a
/// "draw" on a board that actually has a complete line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
