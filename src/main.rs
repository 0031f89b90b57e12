//! Noughts - play one game of tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, GameConfig, TerminalConsole};
use noughts_core::ClassicSession;
use std::path::Path;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Loaded before the subscriber exists, so the loader's own events are
    // dropped; the outcome is logged below instead.
    let config_found = cli.config.exists();
    let config = cli.apply(GameConfig::load_or_default(&cli.config)?);

    initialize_tracing(config.log_file())?;
    info!(
        config_path = %cli.config.display(),
        config_found,
        ?config,
        "Starting noughts"
    );

    run_game(&config)
}

/// Plays a single game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: &GameConfig) -> Result<()> {
    let mut session = ClassicSession::new(TerminalConsole::stdio(config));
    let status = session.play()?;
    info!(?status, "Session over");

    if *config.pause_on_exit() {
        session.console_mut().pause()?;
    }

    Ok(())
}

/// Sends tracing output to `log_file` so it never mixes with the board.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
