//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine owns state;
//! these only read it.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_cells, winning_line_for};
