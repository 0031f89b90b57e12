//! Plain-text rendering of the board and the final result.

use crate::config::PlayerNames;
use noughts_core::{Board, Cell, GameStatus, Player};

/// Banner around the final message.
pub const STARS: &str = "*****";

/// Title line shown above the board.
pub const TITLE: &str = "Tic Tac Toe";

/// Two header lines: the title, then each player with their marker.
pub fn header(names: &PlayerNames) -> String {
    let players = [Player::One, Player::Two]
        .map(|player| format!("{} [{}]", names.name(player), player.marker()))
        .join(", ");
    format!("{TITLE}\n{players}\n")
}

/// Horizontal rule between rows: four characters per cell plus the closing edge.
pub fn row_separator<const N: usize>() -> String {
    "-".repeat(N * 4 + 1)
}

/// One row of cells, e.g. `| X | 1 | O |`.
pub fn board_row(cells: &[Cell]) -> String {
    let mut row: String = cells
        .iter()
        .map(|cell| format!("| {} ", cell.symbol()))
        .collect();
    row.push('|');
    row
}

/// The grid with separators above, between and below the rows.
pub fn grid<const N: usize>(board: &Board<N>) -> String {
    let separator = row_separator::<N>();
    let mut out = String::new();
    for row in board.rows() {
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&board_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

/// Header, blank line, then the grid.
pub fn board<const N: usize>(board: &Board<N>, names: &PlayerNames) -> String {
    format!("{}\n{}", header(names), grid(board))
}

/// Final message naming the winner or declaring a draw.
pub fn result(status: GameStatus, names: &PlayerNames) -> String {
    match status {
        GameStatus::Win(player) => format!("{STARS} {} won! {STARS}", names.name(player)),
        GameStatus::Tie => format!("{STARS} It's a draw! {STARS}"),
        GameStatus::InProgress => format!("{STARS} Game in progress {STARS}"),
    }
}

/// Prompt asking `player` for a cell.
pub fn prompt(player: Player, names: &PlayerNames) -> String {
    format!("{}, enter a number: ", names.name(player))
}
