use thiserror::Error;

/// Why a move was rejected. A rejected move never changes the board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("Cell {0} is outside the board")]
    OutOfRange(usize),
    #[error("Cell {0} is already taken")]
    Occupied(usize),
    #[error("Round is over, reset to keep playing")]
    RoundOver,
}

pub type Result<T> = core::result::Result<T, InvalidMove>;
