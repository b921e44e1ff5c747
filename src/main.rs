//! Tic-tac-toe console front end.
//!
//! Interactive setup (new or loaded game, names, mode), then the game
//! loop; completed matches land in the history log, abandoned ones in
//! the save file.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tictactoe::{
    ConsoleInput, ConsoleRenderer, GameMode, Heuristic, HistoryLog, Mark, MatchEnd, MoveSource,
    Random, SaveFile, Session, SessionState, StrategySeat,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            load,
            save_file,
            history_file,
        } => run_play(load, save_file, history_file),
        Command::History { history_file } => run_history(history_file),
    }
}

/// Prompts and reads one trimmed line; `None` on end of input.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Start menu: NEW sets up a fresh session, LOAD pulls the save (falling
/// back to a fresh default when missing or corrupt). `None` means the
/// player quit at a prompt.
fn start_menu(save: &SaveFile) -> Option<SessionState> {
    loop {
        let choice = prompt("Type NEW to start a new game, or LOAD to load a game: ")?;
        match choice.to_ascii_uppercase().as_str() {
            "NEW" => return setup_new(),
            "LOAD" => {
                return Some(save.load().unwrap_or_else(|| {
                    println!("No save found");
                    SessionState::default()
                }));
            }
            _ => println!("Invalid choice"),
        }
    }
}

/// Asks for names and mode. Empty names fall back to the defaults; the
/// mode prompt retries until it parses.
fn setup_new() -> Option<SessionState> {
    let entered = prompt("Player 1 name (X): ")?;
    let player1 = if entered.is_empty() {
        "Player1".to_string()
    } else {
        entered
    };

    let mode = loop {
        let entered = prompt("Mode (PVP / RANDOM / SMART): ")?;
        match entered.parse::<GameMode>() {
            Ok(mode) => break mode,
            Err(_) => println!("Invalid mode"),
        }
    };

    let player2 = if mode == GameMode::Pvp {
        let entered = prompt("Player 2 name (O): ")?;
        if entered.is_empty() {
            "Player2".to_string()
        } else {
            entered
        }
    } else {
        "Computer".to_string()
    };

    Some(SessionState::new(player1, player2, mode))
}

/// Builds the two seats for the session's mode: seat X is always human,
/// seat O is human only in PVP.
fn seats(state: &SessionState) -> (Box<dyn MoveSource>, Box<dyn MoveSource>) {
    let x: Box<dyn MoveSource> = Box::new(ConsoleInput::new(state.player1.clone()));
    let o: Box<dyn MoveSource> = match state.mode {
        GameMode::Pvp => Box::new(ConsoleInput::new(state.player2.clone())),
        GameMode::Random => Box::new(StrategySeat::new(
            state.player2.clone(),
            Random::new(rand::rng()),
        )),
        GameMode::Smart => Box::new(StrategySeat::new(
            state.player2.clone(),
            Heuristic::new(Mark::O, rand::rng()),
        )),
    };
    (x, o)
}

fn run_play(load: bool, save_file: PathBuf, history_file: PathBuf) -> Result<()> {
    let save = SaveFile::new(save_file);
    let history = HistoryLog::new(history_file);

    let state = if load {
        save.load().unwrap_or_else(|| {
            println!("No save found");
            SessionState::default()
        })
    } else {
        match start_menu(&save) {
            Some(state) => state,
            None => return Ok(()),
        }
    };

    println!("\nTIC TAC TOE\n");
    let mut renderer = ConsoleRenderer::new(state.board);
    renderer.draw();

    let (x, o) = seats(&state);
    let mut session = Session::new(state, x, o);

    match session.run(&mut renderer) {
        MatchEnd::Completed { record, .. } => {
            history.append(&record)?;
            // A finished match must not be resumable.
            save.clear()?;
            info!("match recorded");
        }
        MatchEnd::Abandoned => {
            save.store(session.state())?;
            println!("Game saved. Run `tictactoe play --load` to resume.");
        }
    }

    Ok(())
}

fn run_history(history_file: PathBuf) -> Result<()> {
    let history = HistoryLog::new(history_file);
    let records = history.read_all()?;
    if records.is_empty() {
        println!("No history.");
        return Ok(());
    }
    println!("---- History ----");
    for record in records {
        println!("{} vs {}: {}", record.player1, record.player2, record.result);
    }
    Ok(())
}
