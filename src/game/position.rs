//! Board coordinates with the 1-indexed boundary conversion.

use serde::{Deserialize, Serialize};

/// A cell on the board, 0-indexed internally.
///
/// Both coordinates are below 3 by construction, so downstream code never
/// range-checks. User-facing input and display use 1-indexed coordinates;
/// [`Position::from_input`] is the only crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position from 0-indexed coordinates.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from the external 1-indexed coordinate system.
    ///
    /// Returns `None` for anything outside `1..=3`.
    pub fn from_input(row: u8, col: u8) -> Option<Self> {
        if (1..=3).contains(&row) && (1..=3).contains(&col) {
            Some(Self {
                row: row - 1,
                col: col - 1,
            })
        } else {
            None
        }
    }

    /// 0-indexed row.
    pub fn row(self) -> u8 {
        self.row
    }

    /// 0-indexed column.
    pub fn col(self) -> u8 {
        self.col
    }

    /// 1-indexed row, for prompts and messages.
    pub fn input_row(self) -> u8 {
        self.row + 1
    }

    /// 1-indexed column, for prompts and messages.
    pub fn input_col(self) -> u8 {
        self.col + 1
    }

    /// Row-major index into the board array.
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// The center cell.
    pub const CENTER: Position = Position::at(1, 1);

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub const CORNERS: [Position; 4] = [
        Position::at(0, 0),
        Position::at(0, 2),
        Position::at(2, 0),
        Position::at(2, 2),
    ];

    /// The four edge midpoints: top, left, right, bottom.
    pub const EDGES: [Position; 4] = [
        Position::at(0, 1),
        Position::at(1, 0),
        Position::at(1, 2),
        Position::at(2, 1),
    ];

    /// All 9 cells in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.input_row(), self.input_col())
    }
}
