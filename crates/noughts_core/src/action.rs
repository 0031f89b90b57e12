//! Moves and the reasons a move can be refused.

use super::{Marker, Player};
use serde::{Deserialize, Serialize};

/// A successful placement: a player writing their marker into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player who moved.
    player: Player,
    /// The marker that was written.
    marker: Marker,
    /// Linear cell index, row-major.
    index: usize,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the marker placed by this move.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] -> {}", self.player, self.marker, self.index)
    }
}

/// Error that can occur when applying a move.
///
/// Out-of-range and occupied cells both leave the board untouched and
/// hand the same player another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfBounds(isize),

    /// The cell already holds a marker.
    #[display("Cell {} is already taken", _0)]
    Occupied(isize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The marker does not belong to the moving player.
    #[display("{} does not play {}", player, marker)]
    WrongMarker {
        /// The player attempting the move.
        player: Player,
        /// The marker they tried to place.
        marker: Marker,
    },
}

impl std::error::Error for MoveError {}

/// Outcome of a single move attempt.
pub type MoveResult = Result<Move, MoveError>;
