//! Fixed-priority heuristic strategy, branded "smart" in user-facing text.

use super::{Random, Strategy, winning_move};
use crate::game::{Board, Mark, Position};
use rand::Rng;
use tracing::debug;

/// Greedy positional policy: win now, block the opponent, then center,
/// corner, edge, and finally a random fallback.
///
/// Deliberately not a search; it can lose to optimal play in some lines.
pub struct Heuristic<R: Rng> {
    mark: Mark,
    rng: R,
}

impl<R: Rng> Heuristic<R> {
    /// Creates a heuristic strategy playing `mark`.
    pub fn new(mark: Mark, rng: R) -> Self {
        Self { mark, rng }
    }
}

impl<R: Rng> Strategy for Heuristic<R> {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        if let Some(pos) = winning_move(board, self.mark) {
            debug!(%pos, "heuristic: winning move");
            return Some(pos);
        }
        if let Some(pos) = winning_move(board, self.mark.opponent()) {
            debug!(%pos, "heuristic: blocking move");
            return Some(pos);
        }
        if board.is_empty(Position::CENTER) {
            debug!("heuristic: center");
            return Some(Position::CENTER);
        }
        if let Some(pos) = Position::CORNERS.iter().copied().find(|p| board.is_empty(*p)) {
            debug!(%pos, "heuristic: corner");
            return Some(pos);
        }
        if let Some(pos) = Position::EDGES.iter().copied().find(|p| board.is_empty(*p)) {
            debug!(%pos, "heuristic: edge");
            return Some(pos);
        }
        // Only reachable on a full board, which the session never asks about.
        Random::new(&mut self.rng).choose(board)
    }
}
