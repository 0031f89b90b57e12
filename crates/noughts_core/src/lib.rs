//! Pure tic-tac-toe game logic.
//!
//! The crate has no I/O of its own. It provides:
//!
//! - **Board**: an N×N grid of cells with placement and line queries
//! - **Rules**: win detection and status evaluation as pure functions
//! - **Game**: turn sequencing and move history
//! - **Session**: the turn loop, talking to players through a [`Console`]
//!
//! # Example
//!
//! ```
//! use noughts_core::{ClassicGame, GameStatus, evaluate_status};
//!
//! let mut game = ClassicGame::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let player = game.begin_turn();
//!     game.apply_move(player, player.marker(), index).unwrap();
//! }
//! let last = game.history().last().unwrap().marker();
//! assert!(matches!(evaluate_status(game.board(), last), GameStatus::Win(_)));
//! ```

#![warn(missing_docs)]

mod action;
mod board;
mod game;
mod invariants;
mod rules;
mod session;
mod types;

pub use action::{Move, MoveError, MoveResult};
pub use board::{Board, ClassicBoard, SIZE};
pub use game::{ClassicGame, Game};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use rules::{Line, evaluate_status, has_winning_line, line_is_all_marker, winning_line};
pub use session::{ClassicSession, Console, ConsoleError, Session};
pub use types::{Cell, GameStatus, Marker, Player, switch_player};
