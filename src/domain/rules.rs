use super::{Board, CELL_COUNT, InvalidMove, Player, Result};

/// The eight winning triples: rows, columns, diagonals
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board after a move. Derived, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Place `turn`'s marker at `index`, returning the updated board.
///
/// The input board is taken by value, so on error the caller's copy is untouched.
pub fn apply_move(mut board: Board, turn: Player, index: usize) -> Result<Board> {
    if index >= CELL_COUNT {
        return Err(InvalidMove::OutOfRange(index));
    }
    if board.get(index).is_some_and(|cell| !cell.is_empty()) {
        return Err(InvalidMove::Occupied(index));
    }
    board.set(index, turn);
    Ok(board)
}

/// True iff `player` holds all three cells of any winning triple
pub fn check_winner(board: &Board, player: Player) -> bool {
    WIN_LINES.iter().any(|line| {
        line.iter()
            .all(|&index| board.get(index).is_some_and(|cell| cell.is_taken_by(player)))
    })
}

/// Full board and nobody has a line
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_winner(board, Player::X) && !check_winner(board, Player::O)
}

/// Swap X and O. Not meaningful once the round has ended.
pub const fn next_turn(turn: Player) -> Player {
    turn.opponent()
}

/// Fresh round: empty board, X to move
pub const fn reset() -> (Board, Player) {
    (Board::new(), Player::X)
}

/// Classify the board
pub fn outcome(board: &Board) -> Outcome {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| check_winner(board, player))
        .map(Outcome::Win)
        .unwrap_or_else(|| {
            if is_draw(board) {
                Outcome::Draw
            } else {
                Outcome::InProgress
            }
        })
}
