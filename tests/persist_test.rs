//! Save/load and history behavior through the public API.

use tempfile::tempdir;
use tictactoe::{
    Board, GameMode, HistoryLog, HistoryRecord, Mark, MatchEnd, MoveSignal, MoveSource,
    NullObserver, Outcome, Position, SaveFile, Session, SessionState, Square,
};

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
fn test_save_round_trip_preserves_everything() {
    let dir = tempdir().unwrap();
    let save = SaveFile::new(dir.path().join("save.json"));

    let mut state = SessionState::new("Alice", "Computer", GameMode::Smart);
    state
        .board
        .set(Position::from_input(1, 1).unwrap(), Square::Taken(Mark::X));
    state.turn = Mark::O;

    save.store(&state).unwrap();
    let loaded = save.load().expect("save should load back");
    assert_eq!(loaded, state);
    assert_eq!(loaded.turn, Mark::O);
    assert_eq!(loaded.mode, GameMode::Smart);
    assert_eq!(loaded.name_of(Mark::X), "Alice");
}

#[test]
fn test_corrupt_save_degrades_to_default_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, b"\x00garbage\xff").unwrap();

    let save = SaveFile::new(path);
    let state = save.load().unwrap_or_default();
    assert_eq!(state, SessionState::default());
    assert_eq!(state.turn, Mark::X);
    assert_eq!(state.mode, GameMode::Pvp);
}

#[test]
fn test_abandon_then_resume_finishes_the_same_match() {
    let dir = tempdir().unwrap();
    let save = SaveFile::new(dir.path().join("save.json"));

    // First sitting: two moves, then X walks away.
    let x = Scripted::seat("Alice", vec![play(1, 1), MoveSignal::Quit]);
    let o = Scripted::seat("Bob", vec![play(2, 2)]);
    let mut session = Session::new(SessionState::new("Alice", "Bob", GameMode::Pvp), x, o);
    assert_eq!(session.run(&mut NullObserver), MatchEnd::Abandoned);
    save.store(session.state()).unwrap();

    // Second sitting resumes from the save with X to move again.
    let resumed = save.load().expect("abandoned match was saved");
    assert_eq!(resumed.turn, Mark::X);
    let x = Scripted::seat("Alice", vec![play(1, 2), play(1, 3), play(3, 1)]);
    let o = Scripted::seat("Bob", vec![play(3, 3), play(2, 1)]);
    let mut session = Session::new(resumed, x, o);

    match session.run(&mut NullObserver) {
        MatchEnd::Completed { outcome, record } => {
            assert_eq!(outcome, Outcome::Won(Mark::X));
            assert_eq!(record.result, "Alice");
        }
        other => panic!("expected X's win after resuming, got {other:?}"),
    }
}

#[test]
fn test_history_appends_in_order_and_never_rewrites() {
    let dir = tempdir().unwrap();
    let log = HistoryLog::new(dir.path().join("history.csv"));

    log.append(&HistoryRecord::win("Alice", "Bob", "Alice")).unwrap();
    log.append(&HistoryRecord::draw("Alice", "Bob")).unwrap();
    log.append(&HistoryRecord::win("Carol", "Computer", "Computer"))
        .unwrap();

    let records = log.read_all().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].result, "Alice");
    assert_eq!(records[1].result, tictactoe::DRAW_LABEL);
    assert_eq!(records[2].player2, "Computer");

    // Appending again leaves earlier records untouched.
    log.append(&HistoryRecord::draw("Dan", "Eve")).unwrap();
    let again = log.read_all().unwrap();
    assert_eq!(again[..3], records[..]);
}
