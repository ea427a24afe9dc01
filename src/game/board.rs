use super::Player;

pub const ROWS: usize = 7;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

/// A grid coordinate. Row 0 is the top, row `ROWS - 1` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// Put `player`'s piece at (row, col). The cell must be empty.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert!(self.is_empty(row, col), "cell ({row}, {col}) already occupied");
        self.cells[row][col] = player.to_cell();
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Row a piece dropped into `col` would land in, scanning up from the
    /// bottom. `None` when the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.is_empty(row, col))
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
