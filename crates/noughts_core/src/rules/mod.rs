//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board): line checks and
//! status evaluation. Nothing here mutates state.

pub mod status;
pub mod win;

pub use status::evaluate_status;
pub use win::{Line, has_winning_line, line_is_all_marker, winning_line};
