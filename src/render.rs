//! Presentation seam: the session reports what happened, observers draw it.
//!
//! The core never depends on an observer succeeding; notifications return
//! nothing and observers swallow their own failures.

use crate::game::rules::WinLine;
use crate::game::{Board, Mark, Position, Square};

/// Events emitted by a running session, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A seat is about to move.
    TurnStarted {
        /// Display name of the seat's player.
        name: String,
        /// The mark the seat plays.
        mark: Mark,
    },
    /// A validated move was applied to the board.
    MoveMade {
        /// The mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// The applied move completed a line (for highlighting).
    LineCompleted {
        /// The winning line.
        line: WinLine,
    },
    /// A seat's answer was rejected; the same turn will be retried.
    Rejected {
        /// Short human-readable reason ("Invalid input", "Cell occupied").
        reason: String,
    },
    /// The session reached a terminal state.
    GameOver {
        /// Terminal-state text ("Alice wins!", "Draw!").
        text: String,
    },
}

/// Receives session events. Implementations must not fail the game.
pub trait GameObserver {
    /// Called once per event, in order.
    fn notify(&mut self, event: &GameEvent);
}

/// Observer that ignores everything; used in tests and headless runs.
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Console renderer: keeps its own mirror of the board, rebuilt from the
/// move events, and prints it after each applied move.
#[derive(Debug)]
pub struct ConsoleRenderer {
    board: Board,
}

impl ConsoleRenderer {
    /// Creates a renderer seeded with the session's starting board
    /// (non-empty when resuming a saved game).
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Draws the current mirror of the grid.
    pub fn draw(&self) {
        println!("{}\n", self.board.display());
    }
}

impl GameObserver for ConsoleRenderer {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { name, mark } => {
                println!("{name} ({mark}) to move");
            }
            GameEvent::MoveMade { mark, position } => {
                self.board.set(*position, Square::Taken(*mark));
                self.draw();
            }
            GameEvent::LineCompleted { line } => {
                let [a, b, c] = line.cells;
                println!("{} line: {a} {b} {c}", line.mark);
            }
            GameEvent::Rejected { reason } => {
                println!("{reason}");
            }
            GameEvent::GameOver { text } => {
                println!("{text}");
            }
        }
    }
}
