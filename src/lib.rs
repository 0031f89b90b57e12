//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! Game logic lives in [`noughts_core`]; this crate adds the terminal side:
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Render**: plain-text board, header and result formatting
//! - **Console**: a [`Console`](noughts_core::Console) over any reader and writer
//!
//! # Example
//!
//! ```
//! use noughts::{GameConfig, TerminalConsole};
//! use noughts_core::{ClassicSession, GameStatus, Player};
//! use std::io::Cursor;
//!
//! let config = GameConfig::default().with_clear_screen(false);
//! let input = Cursor::new(b"0\n3\n1\n4\n2\n".to_vec());
//! let mut session = ClassicSession::new(TerminalConsole::new(input, Vec::new(), &config));
//! assert_eq!(session.play().unwrap(), GameStatus::Win(Player::One));
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod console;
pub mod render;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, PlayerNames};
pub use console::TerminalConsole;
