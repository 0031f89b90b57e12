//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto a fresh board must never hit a marked
/// cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl<const N: usize> Invariant<Game<N>> for MonotonicBoardInvariant {
    fn holds(game: &Game<N>) -> bool {
        let mut reconstructed = Board::<N>::new();

        for mov in game.history() {
            if !reconstructed.place_marker(mov.index() as isize, mov.marker()) {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
