//! Game status evaluation after a move.

use super::super::{Board, GameStatus, Marker};
use super::win::winning_line;
use tracing::{debug, instrument};

/// Status of the game right after `last_marker` was placed.
///
/// Only the marker that just moved is checked for a win: the mover is the
/// only one who could have completed a line this turn. A full board with
/// no line for the mover is a tie.
#[instrument(skip(board))]
pub fn evaluate_status<const N: usize>(board: &Board<N>, last_marker: Marker) -> GameStatus {
    if let Some(line) = winning_line(board, last_marker) {
        debug!(%line, "Winning line completed");
        return GameStatus::Win(last_marker.owner());
    }

    if board.is_full() {
        return GameStatus::Tie;
    }

    GameStatus::InProgress
}
