//! End-to-end matches through the public session API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe::{
    Board, GameMode, Heuristic, Mark, MatchEnd, MoveSignal, MoveSource, NullObserver, Outcome,
    Position, Session, SessionState, Step, StrategySeat,
};

/// Human stand-in that replays a fixed script.
struct Scripted {
    name: &'static str,
    answers: std::vec::IntoIter<MoveSignal>,
}

impl Scripted {
    fn seat(name: &'static str, answers: Vec<MoveSignal>) -> Box<Self> {
        Box::new(Self {
            name,
            answers: answers.into_iter(),
        })
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self, _board: &Board, _mark: Mark) -> MoveSignal {
        self.answers.next().unwrap_or(MoveSignal::Quit)
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn play(r: u8, c: u8) -> MoveSignal {
    MoveSignal::Play(Position::from_input(r, c).unwrap())
}

#[test]
fn test_smart_seat_center_reply_in_a_real_session() {
    // Mode SMART, human X opens at (1,1); the computer's reply must be
    // the center.
    let state = SessionState::new("Alice", "Computer", GameMode::Smart);
    let x = Scripted::seat("Alice", vec![play(1, 1)]);
    let o = Box::new(StrategySeat::new(
        "Computer",
        Heuristic::new(Mark::O, StdRng::seed_from_u64(0)),
    ));
    let mut session = Session::new(state, x, o);
    let mut observer = NullObserver;

    assert!(matches!(
        session.step(&mut observer),
        Step::Advanced { mark: Mark::X, .. }
    ));
    match session.step(&mut observer) {
        Step::Advanced { mark, position } => {
            assert_eq!(mark, Mark::O);
            assert_eq!(position, Position::CENTER);
        }
        other => panic!("expected O's reply, got {other:?}"),
    }
}

#[test]
fn test_smart_seat_never_loses_to_a_scripted_blunderer() {
    // X walks the left column but the smart seat blocks the third cell.
    let state = SessionState::new("Alice", "Computer", GameMode::Smart);
    let x = Scripted::seat(
        "Alice",
        vec![play(1, 1), play(2, 1), play(1, 3), play(3, 2), play(2, 3)],
    );
    let o = Box::new(StrategySeat::new(
        "Computer",
        Heuristic::new(Mark::O, StdRng::seed_from_u64(0)),
    ));
    let mut session = Session::new(state, x, o);

    let end = session.run(&mut NullObserver);
    match end {
        MatchEnd::Completed { outcome, .. } => {
            assert_ne!(outcome, Outcome::Won(Mark::X), "the block rule must fire");
        }
        MatchEnd::Abandoned => panic!("scripted match should complete"),
    }
}

#[test]
fn test_two_seeded_strategies_always_finish() {
    for seed in 0..10 {
        let state = SessionState::new("R", "H", GameMode::Smart);
        let x = Box::new(StrategySeat::new(
            "R",
            tictactoe::Random::new(StdRng::seed_from_u64(seed)),
        ));
        let o = Box::new(StrategySeat::new(
            "H",
            Heuristic::new(Mark::O, StdRng::seed_from_u64(seed)),
        ));
        let mut session = Session::new(state, x, o);
        match session.run(&mut NullObserver) {
            MatchEnd::Completed { outcome, .. } => {
                assert_ne!(outcome, Outcome::InProgress);
            }
            MatchEnd::Abandoned => panic!("strategy seats never abandon (seed {seed})"),
        }
    }
}

#[test]
fn test_draw_produces_draw_record() {
    // X O X
    // O X X
    // O X O
    let x = Scripted::seat(
        "Alice",
        vec![play(1, 1), play(1, 3), play(2, 2), play(2, 3), play(3, 2)],
    );
    let o = Scripted::seat("Bob", vec![play(1, 2), play(2, 1), play(3, 1), play(3, 3)]);
    let mut session = Session::new(SessionState::new("Alice", "Bob", GameMode::Pvp), x, o);

    match session.run(&mut NullObserver) {
        MatchEnd::Completed { outcome, record } => {
            assert_eq!(outcome, Outcome::Draw);
            assert_eq!(record.result, tictactoe::DRAW_LABEL);
        }
        other => panic!("expected a drawn match, got {other:?}"),
    }
}

#[test]
fn test_winner_record_carries_the_winning_name() {
    let x = Scripted::seat("Alice", vec![play(1, 1), play(1, 2), play(1, 3)]);
    let o = Scripted::seat("Bob", vec![play(2, 1), play(2, 2)]);
    let mut session = Session::new(SessionState::new("Alice", "Bob", GameMode::Pvp), x, o);

    match session.run(&mut NullObserver) {
        MatchEnd::Completed { outcome, record } => {
            assert_eq!(outcome, Outcome::Won(Mark::X));
            assert_eq!(record.player1, "Alice");
            assert_eq!(record.player2, "Bob");
            assert_eq!(record.result, "Alice");
        }
        other => panic!("expected X's win, got {other:?}"),
    }
}
