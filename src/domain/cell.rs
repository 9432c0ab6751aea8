use std::fmt;

/// One of the two players. X always opens a round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Cell represents a single board position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the cell holds the given player's marker
    pub fn is_taken_by(self, player: Player) -> bool {
        self == Cell::Taken(player)
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Taken(player) => Some(player),
            Cell::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_cell_ownership() {
        assert!(Cell::default().is_empty());
        assert!(Cell::Taken(Player::O).is_taken_by(Player::O));
        assert!(!Cell::Taken(Player::O).is_taken_by(Player::X));
        assert!(!Cell::Empty.is_taken_by(Player::X));
        assert_eq!(Cell::Taken(Player::X).player(), Some(Player::X));
        assert_eq!(Cell::Empty.player(), None);
    }
}
