//! Game session: the state machine driving a match from start to a
//! terminal outcome.
//!
//! The session owns the board, asks one seat at a time for a move through
//! the [`MoveSource`] seam, validates it, applies it, and reports what
//! happened through [`GameObserver`] events. Everything is synchronous:
//! one move runs to completion before the next is requested.

use crate::ai::Strategy;
use crate::game::rules::{self, Verdict, WinLine};
use crate::game::{Board, GameMode, Mark, Outcome, Position, Square};
use crate::persist::HistoryRecord;
use crate::render::{GameEvent, GameObserver};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a seat answered when asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSignal {
    /// A candidate move (already range-checked by construction of
    /// `Position`; occupancy is the session's job).
    Play(Position),
    /// The raw input was not a usable coordinate. Retryable.
    Malformed,
    /// The seat abandoned the match. Normal exit, not an error.
    Quit,
}

/// A seat that can produce moves: a human input adapter or a strategy
/// adapter, selected per seat per mode at construction.
pub trait MoveSource {
    /// Asks for the next move on the given board, playing `mark`.
    ///
    /// Blocks until the seat answers; the session has no timeout.
    fn next_move(&mut self, board: &Board, mark: Mark) -> MoveSignal;

    /// The player's display name.
    fn name(&self) -> &str;
}

/// Computer seat driven by a [`Strategy`].
pub struct StrategySeat<S: Strategy> {
    name: String,
    strategy: S,
}

impl<S: Strategy> StrategySeat<S> {
    /// Creates a computer seat.
    pub fn new(name: impl Into<String>, strategy: S) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

impl<S: Strategy> MoveSource for StrategySeat<S> {
    fn next_move(&mut self, board: &Board, _mark: Mark) -> MoveSignal {
        match self.strategy.choose(board) {
            Some(pos) => {
                debug!(seat = %self.name, %pos, "strategy answered");
                MoveSignal::Play(pos)
            }
            None => {
                // The session never asks on a full board; treat a refusing
                // strategy as the seat walking away.
                warn!(seat = %self.name, "strategy had no move");
                MoveSignal::Quit
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Everything a session persists: the save/load unit.
///
/// Player 1 always plays X, player 2 always plays O; mode and names are
/// fixed for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The board.
    pub board: Board,
    /// Whose turn it is.
    pub turn: Mark,
    /// Player 1's name (seat X).
    pub player1: String,
    /// Player 2's name (seat O).
    pub player2: String,
    /// Who controls seat O.
    pub mode: GameMode,
    /// Progress of the match.
    pub outcome: Outcome,
}

impl SessionState {
    /// Fresh session: empty board, X to move.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>, mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            player1: player1.into(),
            player2: player2.into(),
            mode,
            outcome: Outcome::InProgress,
        }
    }

    /// Name of the player holding the given mark.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player1,
            Mark::O => &self.player2,
        }
    }

    /// History record for a finished match; `None` while in progress.
    pub fn record(&self) -> Option<HistoryRecord> {
        match self.outcome {
            Outcome::Won(mark) => Some(HistoryRecord::win(
                &self.player1,
                &self.player2,
                self.name_of(mark),
            )),
            Outcome::Draw => Some(HistoryRecord::draw(&self.player1, &self.player2)),
            Outcome::InProgress => None,
        }
    }
}

impl Default for SessionState {
    /// The fallback session used when a save is missing or corrupt.
    fn default() -> Self {
        Self::new("Player1", "Player2", GameMode::Pvp)
    }
}

/// Why a seat's answer was rejected. Both cases retry the same turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Raw input was not a digit in range.
    Malformed,
    /// The target cell is already taken.
    Occupied,
}

/// Result of driving the session one turn forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move applied; play passes to the other mark.
    Advanced {
        /// Who moved.
        mark: Mark,
        /// Where.
        position: Position,
    },
    /// Move applied and it completed a line.
    Won {
        /// The winner.
        mark: Mark,
        /// The final move.
        position: Position,
        /// The completed line.
        line: WinLine,
    },
    /// Move applied and it filled the board with no winner.
    Drawn {
        /// Who moved last.
        mark: Mark,
        /// The final move.
        position: Position,
    },
    /// Answer rejected; the turn did not advance. The only retryable path.
    Rejected(Rejection),
    /// The seat abandoned the match.
    Abandoned,
    /// The session was already terminal; no move was requested.
    Finished,
}

/// How a match ended, as seen by the outer loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEnd {
    /// Terminal outcome reached; the record is ready for the history log.
    Completed {
        /// The terminal outcome.
        outcome: Outcome,
        /// Attribution for the history log.
        record: HistoryRecord,
    },
    /// A seat walked away; nothing is recorded.
    Abandoned,
}

/// A running match: persisted state plus the two seats.
pub struct Session {
    state: SessionState,
    seat_x: Box<dyn MoveSource>,
    seat_o: Box<dyn MoveSource>,
}

impl Session {
    /// Creates a session from state (fresh or loaded) and its two seats.
    ///
    /// A loaded session resumes with whatever turn was persisted, which
    /// may be O.
    pub fn new(
        state: SessionState,
        seat_x: Box<dyn MoveSource>,
        seat_o: Box<dyn MoveSource>,
    ) -> Self {
        info!(
            player1 = %state.player1,
            player2 = %state.player2,
            mode = %state.mode,
            turn = %state.turn,
            "session ready"
        );
        Self {
            state,
            seat_x,
            seat_o,
        }
    }

    /// The persisted view of this session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn seat_mut(&mut self, mark: Mark) -> &mut dyn MoveSource {
        match mark {
            Mark::X => self.seat_x.as_mut(),
            Mark::O => self.seat_o.as_mut(),
        }
    }

    /// Drives the session one turn forward.
    ///
    /// Asks the active seat for a move, validates it through the rules
    /// gate, applies it, and settles the outcome. Rejections keep the
    /// state unchanged so the caller retries the same turn.
    #[instrument(skip(self, observer), fields(turn = %self.state.turn))]
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> Step {
        if self.state.outcome != Outcome::InProgress {
            return Step::Finished;
        }

        let mark = self.state.turn;
        let name = self.seat_mut(mark).name().to_string();
        observer.notify(&GameEvent::TurnStarted {
            name: name.clone(),
            mark,
        });

        let board = self.state.board;
        match self.seat_mut(mark).next_move(&board, mark) {
            MoveSignal::Quit => {
                info!(seat = %name, "match abandoned");
                Step::Abandoned
            }
            MoveSignal::Malformed => {
                observer.notify(&GameEvent::Rejected {
                    reason: "Invalid input".to_string(),
                });
                Step::Rejected(Rejection::Malformed)
            }
            MoveSignal::Play(position) => {
                if !rules::is_valid_move(&board, position.input_row(), position.input_col()) {
                    debug!(%position, "cell occupied");
                    observer.notify(&GameEvent::Rejected {
                        reason: "Cell occupied".to_string(),
                    });
                    return Step::Rejected(Rejection::Occupied);
                }
                self.apply(mark, position, observer)
            }
        }
    }

    /// Applies a validated move and settles the resulting state.
    fn apply(&mut self, mark: Mark, position: Position, observer: &mut dyn GameObserver) -> Step {
        self.state.board.set(position, Square::Taken(mark));
        observer.notify(&GameEvent::MoveMade { mark, position });

        match rules::verdict(&self.state.board) {
            Verdict::Win(line) => {
                self.state.outcome = Outcome::Won(mark);
                info!(winner = %self.state.name_of(mark), %mark, "match won");
                observer.notify(&GameEvent::LineCompleted { line });
                observer.notify(&GameEvent::GameOver {
                    text: format!("{} wins!", self.state.name_of(mark)),
                });
                Step::Won {
                    mark,
                    position,
                    line,
                }
            }
            Verdict::Draw => {
                self.state.outcome = Outcome::Draw;
                info!("match drawn");
                observer.notify(&GameEvent::GameOver {
                    text: "Draw!".to_string(),
                });
                Step::Drawn { mark, position }
            }
            Verdict::Open => {
                self.state.turn = mark.opponent();
                Step::Advanced { mark, position }
            }
        }
    }

    /// Runs turns until the match ends.
    ///
    /// Rejections re-prompt the same seat; abandonment exits without a
    /// history record.
    #[instrument(skip(self, observer))]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> MatchEnd {
        loop {
            match self.step(observer) {
                Step::Advanced { .. } | Step::Rejected(_) => {}
                Step::Abandoned => return MatchEnd::Abandoned,
                Step::Won { .. } | Step::Drawn { .. } | Step::Finished => break,
            }
        }
        match self.state.record() {
            Some(record) => MatchEnd::Completed {
                outcome: self.state.outcome,
                record,
            },
            // step() only reports Finished after setting a terminal
            // outcome; a recordless break means nobody finished the match.
            None => MatchEnd::Abandoned,
        }
    }
}
