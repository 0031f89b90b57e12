//! The N×N grid of cells.

use super::{Cell, Line, Marker, MoveError};
use tracing::{debug, instrument};

/// Side length of the board the game is played on. Set to 4 for a 4×4 game.
pub const SIZE: usize = 3;

/// Number of digit labels before placeholders continue with letters.
const DIGIT_LABELS: usize = 9;

/// Largest cell count that still gets distinct `0-9a-z` style labels.
const MAX_CELLS: usize = DIGIT_LABELS + 26;

/// Board of the configured [`SIZE`].
pub type ClassicBoard = Board<SIZE>;

/// Square tic-tac-toe board with `N` rows and `N` columns.
///
/// Cells are addressed by a linear index `0..N*N`, row-major:
/// `(row, col) = (index / N, index % N)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

/// Placeholder label for the cell at `index`: `'0'..='8'`, then `'a'`, `'b'`, ...
fn placeholder(index: usize) -> char {
    let offset = if index < DIGIT_LABELS {
        b'0' + index as u8
    } else {
        b'a' + (index - DIGIT_LABELS) as u8
    };
    char::from(offset)
}

impl<const N: usize> Board<N> {
    /// Creates a board with every cell open.
    #[instrument]
    pub fn new() -> Self {
        const {
            assert!(N > 0 && N * N <= MAX_CELLS, "board side out of supported range");
        }
        let mut board = Self {
            cells: [[Cell::Open('0'); N]; N],
        };
        board.initialize();
        board
    }

    /// Resets every cell to its placeholder label, row-major.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        for (index, cell) in self.cells.iter_mut().flatten().enumerate() {
            *cell = Cell::Open(placeholder(index));
        }
    }

    /// Number of cells on the board.
    pub const fn cell_count() -> usize {
        N * N
    }

    /// Maps a linear index to `(row, col)`, or `None` when off the board.
    #[instrument]
    pub fn coordinates(index: isize) -> Option<(usize, usize)> {
        let index = usize::try_from(index).ok()?;
        (index < N * N).then_some((index / N, index % N))
    }

    /// Gets the cell at the given linear index.
    #[instrument(skip(self))]
    pub fn cell(&self, index: isize) -> Option<Cell> {
        Self::coordinates(index).map(|(row, col)| self.cells[row][col])
    }

    /// Writes `marker` into the cell at `index`.
    ///
    /// Returns the resolved cell index on success. The board is left
    /// untouched when the index is off the board or the cell is taken.
    #[instrument(skip(self))]
    pub fn try_place(&mut self, index: isize, marker: Marker) -> Result<usize, MoveError> {
        let (row, col) = Self::coordinates(index).ok_or(MoveError::OutOfBounds(index))?;
        let cell = &mut self.cells[row][col];
        if cell.is_marked() {
            debug!(row, col, "Cell already taken");
            return Err(MoveError::Occupied(index));
        }
        *cell = Cell::Marked(marker);
        Ok(row * N + col)
    }

    /// Writes `marker` into the cell at `index` if that is a legal move.
    ///
    /// Returns `false` without touching the board when the index is off the
    /// board or the cell already holds a marker.
    pub fn place_marker(&mut self, index: isize, marker: Marker) -> bool {
        self.try_place(index, marker).is_ok()
    }

    /// True when every cell holds a cross or a nought.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_marked())
    }

    /// The cells of row `row`, left to right.
    pub fn row_values(&self, row: usize) -> Option<[Cell; N]> {
        self.cells.get(row).copied()
    }

    /// The cells of column `col`, top to bottom.
    pub fn col_values(&self, col: usize) -> Option<[Cell; N]> {
        (col < N).then(|| std::array::from_fn(|row| self.cells[row][col]))
    }

    /// Top-left to bottom-right.
    pub fn main_diagonal_values(&self) -> [Cell; N] {
        std::array::from_fn(|i| self.cells[i][i])
    }

    /// Top-right to bottom-left.
    pub fn anti_diagonal_values(&self) -> [Cell; N] {
        std::array::from_fn(|i| self.cells[i][N - 1 - i])
    }

    /// The cells along `line`, or `None` for a row or column past the edge.
    pub fn line_values(&self, line: Line) -> Option<[Cell; N]> {
        match line {
            Line::Row(row) => self.row_values(row),
            Line::Column(col) => self.col_values(col),
            Line::MainDiagonal => Some(self.main_diagonal_values()),
            Line::AntiDiagonal => Some(self.anti_diagonal_values()),
        }
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Indices of cells that can still be played.
    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, cell)| !cell.is_marked())
            .map(|(index, _)| index)
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn symbols<const N: usize>(board: &Board<N>) -> Vec<char> {
        board.rows().iter().flatten().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_initialize_labels_cells_in_order() {
        let board = ClassicBoard::new();
        assert_eq!(symbols(&board), ['0', '1', '2', '3', '4', '5', '6', '7', '8']);
    }

    #[test]
    fn test_placeholders_are_distinct_and_not_markers() {
        let board = Board::<4>::new();
        let labels: HashSet<char> = symbols(&board).into_iter().collect();
        assert_eq!(labels.len(), 16);
        assert!(!labels.contains(&Marker::Cross.symbol()));
        assert!(!labels.contains(&Marker::Nought.symbol()));
        assert_eq!(board.cell(9), Some(Cell::Open('a')));
        assert_eq!(board.cell(15), Some(Cell::Open('g')));
    }

    #[test]
    fn test_place_marker_on_open_cell() {
        let mut board = ClassicBoard::new();
        assert!(board.place_marker(4, Marker::Cross));
        assert_eq!(board.cell(4), Some(Cell::Marked(Marker::Cross)));
    }

    #[test]
    fn test_place_marker_twice_fails() {
        let mut board = ClassicBoard::new();
        assert!(board.place_marker(4, Marker::Cross));
        assert!(!board.place_marker(4, Marker::Nought));
        assert!(!board.place_marker(4, Marker::Cross));
        assert_eq!(board.cell(4), Some(Cell::Marked(Marker::Cross)));
    }

    #[test]
    fn test_out_of_range_index_leaves_board_untouched() {
        let mut board = ClassicBoard::new();
        let before = board.clone();
        assert!(!board.place_marker(-1, Marker::Cross));
        assert!(!board.place_marker(9, Marker::Cross));
        assert_eq!(board, before);
        assert_eq!(board.try_place(9, Marker::Cross), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_try_place_reports_occupied() {
        let mut board = ClassicBoard::new();
        assert_eq!(board.try_place(2, Marker::Nought), Ok(2));
        assert_eq!(board.try_place(2, Marker::Cross), Err(MoveError::Occupied(2)));
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!ClassicBoard::new().is_full());
    }

    #[test]
    fn test_one_placeholder_left_is_not_full() {
        // Every cell but the last holds a mix of markers; a check of the form
        // "not X or not O" would wrongly call this board full.
        let mut board = ClassicBoard::new();
        for index in 0..8 {
            let marker = if index % 2 == 0 { Marker::Cross } else { Marker::Nought };
            assert!(board.place_marker(index, marker));
        }
        assert!(!board.is_full());

        assert!(board.place_marker(8, Marker::Cross));
        assert!(board.is_full());
    }

    #[test]
    fn test_line_accessors() {
        let mut board = ClassicBoard::new();
        board.place_marker(0, Marker::Cross);
        board.place_marker(4, Marker::Nought);
        board.place_marker(2, Marker::Cross);

        let x = Cell::Marked(Marker::Cross);
        let o = Cell::Marked(Marker::Nought);
        assert_eq!(board.row_values(0), Some([x, Cell::Open('1'), x]));
        assert_eq!(board.col_values(1), Some([Cell::Open('1'), o, Cell::Open('7')]));
        assert_eq!(board.main_diagonal_values(), [x, o, Cell::Open('8')]);
        assert_eq!(board.anti_diagonal_values(), [x, o, Cell::Open('6')]);
        assert_eq!(board.row_values(3), None);
        assert_eq!(board.line_values(Line::Column(3)), None);
    }

    #[test]
    fn test_open_indices_skip_marked_cells() {
        let mut board = ClassicBoard::new();
        board.place_marker(0, Marker::Cross);
        board.place_marker(8, Marker::Nought);
        assert_eq!(board.open_indices().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_initialize_resets_board() {
        let mut board = ClassicBoard::new();
        board.place_marker(3, Marker::Nought);
        board.initialize();
        assert_eq!(board, ClassicBoard::new());
    }
}
