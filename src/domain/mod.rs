mod cell;
mod board;
mod error;
pub mod rules;

pub use cell::{Cell, Player};
pub use board::{Board, CELL_COUNT};
pub use error::{InvalidMove, Result};
pub use rules::{Outcome, WIN_LINES, apply_move, check_winner, is_draw, next_turn, outcome, reset};
