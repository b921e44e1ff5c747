//! Core domain: board, coordinates, and rules.

mod position;
pub mod rules;
mod types;

pub use position::Position;
pub use types::{Board, GameMode, Mark, Outcome, Square};
