//! Uniform random strategy.

use super::Strategy;
use crate::game::{Board, Position};
use rand::Rng;
use tracing::debug;

/// Picks uniformly among the empty cells.
///
/// The random source is injected so behavior is reproducible under test
/// (seed a `StdRng` instead of relying on a hidden global).
pub struct Random<R: Rng> {
    rng: R,
}

impl<R: Rng> Random<R> {
    /// Creates a random strategy over the given source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for Random<R> {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let open = board.empty_positions();
        if open.is_empty() {
            return None;
        }
        let pos = open[self.rng.random_range(0..open.len())];
        debug!(%pos, "random strategy chose");
        Some(pos)
    }
}
