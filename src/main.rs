//! Tictactoe - command-line front end for the game-state engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{EngineConfig, FileStore, GameEngine, PersistenceAdapter, Position, render};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let store = FileStore::new(config.state_dir());
    let mut engine = GameEngine::new(PersistenceAdapter::with_key(store, config.state_key()));

    let state = match cli.command {
        Command::Show => engine.state(),
        Command::Move { square } => engine.request_move(parse_square(&square)?),
        Command::Reset => engine.request_reset(),
    };

    println!("{}", render(state));
    Ok(())
}

/// Resolves configuration: file (or defaults), then command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    let config = match &cli.state_dir {
        Some(dir) => config.with_state_dir(dir.clone()),
        None => config,
    };
    debug!(?config, "Configuration resolved");
    Ok(config)
}

/// Parses a square given as an index or a position label.
///
/// Out-of-range indices are passed through; the engine ignores them.
fn parse_square(square: &str) -> Result<usize> {
    if let Ok(index) = square.trim().parse::<usize>() {
        return Ok(index);
    }
    match Position::from_label(square) {
        Some(pos) => Ok(pos.to_index()),
        None => bail!("Unrecognized square '{}'", square),
    }
}
