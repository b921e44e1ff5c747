//! Tic-tac-toe engine with pluggable seats, save files, and a match
//! history log.
//!
//! # Architecture
//!
//! - **game**: board, coordinates, and the rules engine (win/draw/legality)
//! - **ai**: the two computer strategies (uniform random and the fixed
//!   "smart" heuristic) over an injectable random source
//! - **session**: the turn state machine, with a [`MoveSource`] seam so a
//!   seat is a human input adapter or a strategy adapter, never a special
//!   case in the loop
//! - **persist**: the save file (resume an in-progress match) and the
//!   append-only history log
//! - **render** / **input**: console adapters at the presentation and
//!   input seams
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameMode, MatchEnd, NullObserver, Session, SessionState, StrategySeat};
//! use tictactoe::{Heuristic, Mark, Random};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let state = SessionState::new("Rng", "Smart", GameMode::Smart);
//! let x = Box::new(StrategySeat::new("Rng", Random::new(StdRng::seed_from_u64(1))));
//! let o = Box::new(StrategySeat::new(
//!     "Smart",
//!     Heuristic::new(Mark::O, StdRng::seed_from_u64(2)),
//! ));
//! let mut session = Session::new(state, x, o);
//! let end = session.run(&mut NullObserver);
//! assert!(matches!(end, MatchEnd::Completed { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod input;
mod persist;
mod render;
mod session;

// Crate-level exports - domain types and rules
pub use game::rules::{Verdict, WinLine, check_winner, is_draw, is_valid_move, verdict};
pub use game::{Board, GameMode, Mark, Outcome, Position, Square};

// Crate-level exports - strategies
pub use ai::{Heuristic, Random, Strategy};

// Crate-level exports - session state machine
pub use session::{
    MatchEnd, MoveSignal, MoveSource, Rejection, Session, SessionState, Step, StrategySeat,
};

// Crate-level exports - persistence collaborators
pub use persist::{DRAW_LABEL, HistoryLog, HistoryRecord, PersistError, SaveFile};

// Crate-level exports - console adapters
pub use input::ConsoleInput;
pub use render::{ConsoleRenderer, GameEvent, GameObserver, NullObserver};
