//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe - play one move at a time, with the game saved between runs
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with persistent game state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Directory holding the saved game (overrides the config file)
    #[arg(long)]
    pub state_dir: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current game
    Show,

    /// Place the current player's mark
    Move {
        /// Square index (0-8, row-major) or label such as "center" or "top-left"
        square: String,
    },

    /// Start a new game
    Reset,
}
