//! Append-only match history log.
//!
//! One delimited text line per completed match. The core only appends;
//! reading back is a reporting concern for the `history` subcommand.

use super::PersistError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Result label written when a match ends without a winner.
pub const DRAW_LABEL: &str = "Draw";

/// One completed match: both names and the result label (the winner's
/// name, or [`DRAW_LABEL`]). Records are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Player 1 (seat X).
    pub player1: String,
    /// Player 2 (seat O).
    pub player2: String,
    /// Winner's name, or the draw label.
    pub result: String,
}

impl HistoryRecord {
    /// Record for a won match.
    pub fn win(player1: impl Into<String>, player2: impl Into<String>, winner: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            result: winner.into(),
        }
    }

    /// Record for a drawn match.
    pub fn draw(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            result: DRAW_LABEL.to_string(),
        }
    }

    fn to_line(&self) -> String {
        format!("{},{},{}", self.player1, self.player2, self.result)
    }

    fn parse(line: &str) -> Option<Self> {
        let mut fields = line.splitn(3, ',');
        Some(Self {
            player1: fields.next()?.to_string(),
            player2: fields.next()?.to_string(),
            result: fields.next()?.to_string(),
        })
    }
}

/// The history log file. The path is injected at construction, never a
/// process-wide constant.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    /// Creates a log over the given path; the file appears on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one record.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub fn append(&self, record: &HistoryRecord) -> Result<(), PersistError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        debug!(result = %record.result, "history record appended");
        Ok(())
    }

    /// Reads all records, oldest first. A missing file is an empty history,
    /// not an error; unparseable lines are skipped.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read_all(&self) -> Result<Vec<HistoryRecord>, PersistError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(text.lines().filter_map(HistoryRecord::parse).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_format() {
        let record = HistoryRecord::win("Alice", "Bob", "Alice");
        assert_eq!(record.to_line(), "Alice,Bob,Alice");
        assert_eq!(HistoryRecord::parse("Alice,Bob,Alice"), Some(record));
    }

    #[test]
    fn test_draw_record_uses_label() {
        let record = HistoryRecord::draw("Alice", "Computer");
        assert_eq!(record.result, DRAW_LABEL);
    }

    #[test]
    fn test_append_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("history.csv"));

        log.append(&HistoryRecord::win("Alice", "Bob", "Bob")).unwrap();
        log.append(&HistoryRecord::draw("Alice", "Bob")).unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].result, "Bob");
        assert_eq!(records[1].result, DRAW_LABEL);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("nope.csv"));
        assert!(log.read_all().unwrap().is_empty());
    }
}
