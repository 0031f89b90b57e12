//! Turn sequencing for a single game.

use super::action::{Move, MoveError, MoveResult};
use super::board::{Board, SIZE};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::evaluate_status;
use super::types::{GameStatus, Marker, Player, switch_player};
use tracing::{debug, info, instrument};

/// Game on a board of the configured [`SIZE`].
pub type ClassicGame = Game<SIZE>;

/// Tic-tac-toe game engine.
///
/// Owns the board, whose turn it is, a turn counter and the history of
/// successful moves. The status is never stored; it is recomputed from
/// the board and the last move.
#[derive(Debug, Clone)]
pub struct Game<const N: usize> {
    pub(crate) board: Board<N>,
    pub(crate) current: Player,
    pub(crate) turn: usize,
    pub(crate) history: Vec<Move>,
}

impl<const N: usize> Game<N> {
    /// Creates a new game.
    ///
    /// The current player starts as [`Player::Two`] so that the first
    /// [`begin_turn`](Self::begin_turn) hands the move to [`Player::One`].
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::Two,
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Number of turns begun so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status after the most recent successful move.
    pub fn status(&self) -> GameStatus {
        self.history
            .last()
            .map_or(GameStatus::InProgress, |last| evaluate_status(&self.board, last.marker()))
    }

    /// Passes the turn to the other player and returns the new mover.
    #[instrument(skip(self), fields(turn = self.turn + 1))]
    pub fn begin_turn(&mut self) -> Player {
        self.current = switch_player(self.current);
        self.turn += 1;
        debug!(player = %self.current, "Turn started");
        self.current
    }

    /// Attempts a single placement for `player`.
    ///
    /// On failure the board and turn are unchanged, so the same player
    /// simply tries again.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(&mut self, player: Player, marker: Marker, index: isize) -> MoveResult {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.current {
            return Err(MoveError::WrongPlayer(player));
        }
        if marker != player.marker() {
            return Err(MoveError::WrongMarker { player, marker });
        }

        let index = self.board.try_place(index, marker)?;
        let mov = Move::new(player, marker, index);
        self.history.push(mov);
        info!(%mov, "Move applied");

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "game invariants violated after {mov}"
        );
        Ok(mov)
    }
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Self::new()
    }
}
