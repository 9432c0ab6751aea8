use super::{Cell, Player};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Board holds the nine cells in row-major order.
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell empty
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get cell at index (with bounds checking)
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Place a marker. Only the rules engine writes through this.
    pub(super) fn set(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Taken(player);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of every empty cell, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// How many markers the player has placed this round
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|cell| cell.is_taken_by(player)).count()
    }

    /// Iterate over all cells with their indices
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells.iter().copied().enumerate()
    }
}
