//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player writes into a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Marker {
    /// The cross, owned by [`Player::One`].
    #[strum(to_string = "X")]
    Cross,
    /// The nought, owned by [`Player::Two`].
    #[strum(to_string = "O")]
    Nought,
}

impl Marker {
    /// Character drawn on the board for this marker.
    pub const fn symbol(self) -> char {
        match self {
            Marker::Cross => 'X',
            Marker::Nought => 'O',
        }
    }

    /// The player permanently associated with this marker.
    #[instrument]
    pub fn owner(self) -> Player {
        match self {
            Marker::Cross => Player::One,
            Marker::Nought => Player::Two,
        }
    }
}

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Player {
    /// Moves first, plays crosses.
    #[strum(to_string = "Player 1")]
    One,
    /// Moves second, plays noughts.
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    #[instrument]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The marker this player uses for the whole game.
    #[instrument]
    pub fn marker(self) -> Marker {
        match self {
            Player::One => Marker::Cross,
            Player::Two => Marker::Nought,
        }
    }

    /// Zero-based seat number, usable as an index into per-player tables.
    pub const fn seat(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Hands the turn to the other player.
#[instrument]
pub fn switch_player(current: Player) -> Player {
    current.opponent()
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not yet played; carries the label players type to pick this cell.
    Open(char),
    /// Claimed by a marker. Never overwritten.
    Marked(Marker),
}

impl Cell {
    /// True once the cell holds a cross or a nought.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(Marker::Cross) | Cell::Marked(Marker::Nought))
    }

    /// Character used when drawing the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Open(label) => label,
            Cell::Marked(marker) => marker.symbol(),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Win(Player),
    /// Board filled up with no winning line.
    Tie,
}

impl GameStatus {
    /// True for the terminal statuses.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(player),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }
}
