//! Win detection over the 8 fixed lines.

use super::super::position::Position;
use super::super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};

/// A completed line: the mark that owns it and its three cells in the
/// line's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning mark.
    pub mark: Mark,
    /// The three cells of the line.
    pub cells: [Position; 3],
}

/// The 8 win lines in scan order: rows top-to-bottom, columns
/// left-to-right, main diagonal, anti-diagonal. The order is observable
/// (first complete line wins the scan) and must not change.
const LINES: [[Position; 3]; 8] = [
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Checks for a winner on the board.
///
/// Scans the 8 lines in fixed order and reports the first one whose three
/// cells hold the same mark. A board with several complete lines (possible
/// only in tampered or loaded states) still reports exactly one: the first
/// in scan order.
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for cells in LINES {
        let sq = board.get(cells[0]);
        if sq != Square::Empty && sq == board.get(cells[1]) && sq == board.get(cells[2]) {
            if let Square::Taken(mark) = sq {
                return Some(WinLine { mark, cells });
            }
        }
    }
    None
}
