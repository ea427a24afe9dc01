//! Four-in-a-row detection and the winning line it produces.

use super::board::{Board, Cell, Position, COLS, ROWS};
use super::Player;

/// Number of aligned pieces needed to win
pub const WIN_LENGTH: usize = 4;

/// Orientation of a winning line. Row indices grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// `\`: row and column both increase
    DownRight,
    /// `/`: row increases while column decreases
    DownLeft,
}

impl Direction {
    /// (row, col) step between consecutive cells of a line
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// Position `i` steps from `start`, or `None` if it leaves the board.
    fn offset(self, start: Position, i: usize) -> Option<Position> {
        let (dr, dc) = self.step();
        let row = start.row as isize + dr * i as isize;
        let col = start.col as isize + dc * i as isize;
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }
}

/// The four cells of a completed four-in-a-row, in the order they were
/// scanned: left to right, top to bottom, or increasing row along a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    cells: [Position; WIN_LENGTH],
    direction: Direction,
}

impl WinningLine {
    pub fn cells(&self) -> [Position; WIN_LENGTH] {
        self.cells
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }
}

/// Look for a four-in-a-row of `player` after a piece landed at (row, col).
///
/// Checks, in order: the whole row, the whole column, every in-bounds
/// down-right diagonal start, every in-bounds down-left diagonal start. The
/// first qualifying run is returned; simultaneous lines beyond it are not
/// reported.
pub fn evaluate(board: &Board, player: Player, row: usize, col: usize) -> Option<WinningLine> {
    let target = player.to_cell();

    let across = (0..COLS).map(|c| Position::new(row, c));
    if let Some(line) = scan_run(board, target, across, Direction::Horizontal) {
        return Some(line);
    }

    let down = (0..ROWS).map(|r| Position::new(r, col));
    if let Some(line) = scan_run(board, target, down, Direction::Vertical) {
        return Some(line);
    }

    for start_row in 0..=ROWS - WIN_LENGTH {
        for start_col in 0..=COLS - WIN_LENGTH {
            let start = Position::new(start_row, start_col);
            if let Some(line) = run_from(board, target, start, Direction::DownRight) {
                return Some(line);
            }
        }
    }

    for start_row in 0..=ROWS - WIN_LENGTH {
        for start_col in (WIN_LENGTH - 1..COLS).rev() {
            let start = Position::new(start_row, start_col);
            if let Some(line) = run_from(board, target, start, Direction::DownLeft) {
                return Some(line);
            }
        }
    }

    None
}

/// Walk a full row or column keeping a running count of consecutive
/// `target` cells; any other cell resets the count.
fn scan_run(
    board: &Board,
    target: Cell,
    cells: impl Iterator<Item = Position>,
    direction: Direction,
) -> Option<WinningLine> {
    let mut run = [Position::new(0, 0); WIN_LENGTH];
    let mut count = 0;

    for pos in cells {
        if board.get(pos.row, pos.col) == target {
            run[count] = pos;
            count += 1;
            if count == WIN_LENGTH {
                return Some(WinningLine {
                    cells: run,
                    direction,
                });
            }
        } else {
            count = 0;
        }
    }

    None
}

/// Check the `WIN_LENGTH` cells starting at `start` along `direction`.
fn run_from(
    board: &Board,
    target: Cell,
    start: Position,
    direction: Direction,
) -> Option<WinningLine> {
    let mut run = [start; WIN_LENGTH];
    for (i, slot) in run.iter_mut().enumerate() {
        let pos = direction.offset(start, i)?;
        if board.get(pos.row, pos.col) != target {
            return None;
        }
        *slot = pos;
    }
    Some(WinningLine {
        cells: run,
        direction,
    })
}
