//! One complete game, from the first turn to a terminal status.
//!
//! The session owns the turn loop. Everything that touches a screen or a
//! keyboard goes through the [`Console`] trait, so a whole game can be
//! driven from a script in tests.

use super::action::{Move, MoveError};
use super::board::{Board, SIZE};
use super::game::Game;
use super::rules::evaluate_status;
use super::types::{GameStatus, Player};
use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

/// Error raised by a [`Console`] implementation.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// The I/O side of a game: shows the board and asks players for cells.
pub trait Console {
    /// Shows the board, usually with a header naming both players.
    fn render_board<const N: usize>(&mut self, board: &Board<N>) -> Result<(), ConsoleError>;

    /// Asks `player` for a cell index.
    ///
    /// Parsing is the console's business; the value is only checked
    /// against the board after it is returned.
    fn read_move(&mut self, player: Player) -> Result<isize, ConsoleError>;

    /// Tells `player` their last choice was refused and they must choose again.
    fn reject_move(&mut self, player: Player, error: &MoveError) -> Result<(), ConsoleError>;

    /// Announces the final status.
    fn render_result(&mut self, status: GameStatus) -> Result<(), ConsoleError>;
}

/// Session on a board of the configured [`SIZE`].
pub type ClassicSession<C> = Session<C, SIZE>;

/// Drives a [`Game`] through a [`Console`] until someone wins or the board fills.
#[derive(Debug)]
pub struct Session<C, const N: usize> {
    game: Game<N>,
    console: C,
}

impl<C: Console, const N: usize> Session<C, N> {
    /// Creates a session with a fresh board.
    pub fn new(console: C) -> Self {
        Self {
            game: Game::new(),
            console,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game<N> {
        &self.game
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Returns the console, mutably.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consumes the session, handing back the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays turns until the game reaches a terminal status.
    ///
    /// Renders the final board and the result before returning that status.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<GameStatus, ConsoleError> {
        info!(size = N, "Game started");

        loop {
            let player = self.game.begin_turn();
            self.console.render_board(self.game.board())?;

            let mov = self.take_turn(player)?;
            let status = evaluate_status(self.game.board(), mov.marker());

            if status.is_over() {
                info!(?status, turns = self.game.turn(), "Game finished");
                self.console.render_board(self.game.board())?;
                self.console.render_result(status)?;
                return Ok(status);
            }
        }
    }

    /// Asks `player` for cells until one is accepted.
    #[instrument(skip(self))]
    fn take_turn(&mut self, player: Player) -> Result<Move, ConsoleError> {
        loop {
            let index = self.console.read_move(player)?;
            match self.game.apply_move(player, player.marker(), index) {
                Ok(mov) => return Ok(mov),
                Err(err) => {
                    warn!(%player, index, error = %err, "Move rejected");
                    self.console.reject_move(player, &err)?;
                }
            }
        }
    }
}
