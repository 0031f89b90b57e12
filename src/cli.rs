//! Command-line interface for noughts.

use crate::config::GameConfig;
use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Keep previous boards on screen instead of clearing between turns
    #[arg(long)]
    pub no_clear: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies flags on top of a loaded configuration.
    ///
    /// Flags only ever switch behaviour on or redirect output; leaving a
    /// flag out keeps the configured value.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        if self.pause {
            config = config.with_pause_on_exit(true);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        config
    }
}
