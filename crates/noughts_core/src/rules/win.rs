//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A straight line of `N` cells that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row by index, top to bottom.
    Row(usize),
    /// Column by index, left to right.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line of an `N`×`N` board in checking order:
    /// rows, then columns, then the two diagonals.
    pub fn all<const N: usize>() -> impl Iterator<Item = Line> {
        (0..N)
            .map(Line::Row)
            .chain((0..N).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// True iff every cell in `line` holds `marker`.
pub fn line_is_all_marker(line: &[Cell], marker: Marker) -> bool {
    line.iter().all(|cell| *cell == Cell::Marked(marker))
}

/// Finds the first line filled with `marker`, if any.
///
/// Rows are checked before columns, columns before diagonals; the search
/// stops at the first match.
#[instrument(skip(board))]
pub fn winning_line<const N: usize>(board: &Board<N>, marker: Marker) -> Option<Line> {
    Line::all::<N>().find(|line| {
        board
            .line_values(*line)
            .is_some_and(|cells| line_is_all_marker(&cells, marker))
    })
}

/// True iff some row, column or diagonal is filled with `marker`.
pub fn has_winning_line<const N: usize>(board: &Board<N>, marker: Marker) -> bool {
    winning_line(board, marker).is_some()
}
