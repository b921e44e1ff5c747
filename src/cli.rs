//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe - play on the console, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with save files and a match history log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match
    Play {
        /// Resume from the save file, skipping the start menu
        #[arg(long)]
        load: bool,

        /// Path to the save file
        #[arg(long, default_value = "tictactoe_save.json")]
        save_file: PathBuf,

        /// Path to the history log
        #[arg(long, default_value = "tictactoe_history.csv")]
        history_file: PathBuf,
    },

    /// Print the match history log
    History {
        /// Path to the history log
        #[arg(long, default_value = "tictactoe_history.csv")]
        history_file: PathBuf,
    },
}
