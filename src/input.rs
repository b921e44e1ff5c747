//! Console input adapter for human seats.

use crate::game::{Board, Mark, Position};
use crate::session::{MoveSignal, MoveSource};
use std::io::{BufRead, Write};
use tracing::debug;

/// What one prompt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    /// A digit in `1..=3`.
    Value(u8),
    /// Anything else that was typed. Retryable.
    Malformed,
    /// End of input, or an explicit quit. The match is abandoned.
    NoAnswer,
}

fn parse_answer(line: &str) -> Answer {
    let text = line.trim();
    if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
        return Answer::NoAnswer;
    }
    match text.parse::<u8>() {
        Ok(value @ 1..=3) => Answer::Value(value),
        _ => Answer::Malformed,
    }
}

/// Human seat reading 1-indexed coordinates from standard input.
///
/// Asks for the row, then the column. A non-digit or out-of-range answer
/// is reported as malformed (the session re-prompts); EOF or `q`/`quit`
/// abandons the match. The two are distinct signals on purpose.
pub struct ConsoleInput {
    name: String,
}

impl ConsoleInput {
    /// Creates a console seat for the named player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn ask(&self, prompt: &str) -> Answer {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => Answer::NoAnswer,
            Ok(_) => parse_answer(&line),
        }
    }
}

impl MoveSource for ConsoleInput {
    fn next_move(&mut self, _board: &Board, _mark: Mark) -> MoveSignal {
        let row = match self.ask("Row (1-3): ") {
            Answer::Value(v) => v,
            Answer::Malformed => return MoveSignal::Malformed,
            Answer::NoAnswer => return MoveSignal::Quit,
        };
        let col = match self.ask("Column (1-3): ") {
            Answer::Value(v) => v,
            Answer::Malformed => return MoveSignal::Malformed,
            Answer::NoAnswer => return MoveSignal::Quit,
        };
        match Position::from_input(row, col) {
            Some(pos) => {
                debug!(seat = %self.name, %pos, "human answered");
                MoveSignal::Play(pos)
            }
            // ask() already bounds both digits, so this arm is inert.
            None => MoveSignal::Malformed,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digit_in_range() {
        assert_eq!(parse_answer("2\n"), Answer::Value(2));
        assert_eq!(parse_answer("  3  "), Answer::Value(3));
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_answer("0"), Answer::Malformed);
        assert_eq!(parse_answer("4"), Answer::Malformed);
        assert_eq!(parse_answer("x"), Answer::Malformed);
        assert_eq!(parse_answer(""), Answer::Malformed);
        assert_eq!(parse_answer("2 3"), Answer::Malformed);
    }

    #[test]
    fn test_parse_quit_words_abandon() {
        assert_eq!(parse_answer("q"), Answer::NoAnswer);
        assert_eq!(parse_answer("QUIT\n"), Answer::NoAnswer);
    }
}
