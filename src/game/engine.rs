use tracing::{debug, info};

use super::board::{Board, Position, COLS};
use super::line::{self, WinningLine};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Draw,
    Won(Player),
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was not made. The game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is over")]
    GameOver,
}

/// Result of a successful placement, everything a renderer needs to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub position: Position,
    pub player: Player,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

/// Connect Four game: the board, whose turn it is, and the outcome so far.
///
/// The board is only ever written through [`Game::attempt_move`]; callers get
/// read access via [`Game::board`].
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    moves_played: usize,
}

impl Game {
    /// Empty board, Red to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Player::FIRST,
            status: GameStatus::InProgress,
            winning_line: None,
            moves_played: 0,
        }
    }

    /// Throw the current game away and start a fresh one.
    pub fn restart(&mut self) {
        info!(moves = self.moves_played, status = ?self.status, "restarting game");
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Player to move next, or `None` once the game has ended
    pub fn current_turn(&self) -> Option<Player> {
        (!self.is_terminal()).then_some(self.turn)
    }

    /// The completed four-in-a-row, present only when the game was won
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Number of pieces placed since the game started
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Columns that can still take a piece (empty once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| self.board.lowest_empty_row(col).is_some())
            .collect()
    }

    /// Drop the current player's piece into `col`.
    ///
    /// Out-of-range columns, full columns and finished games are rejected
    /// with a [`MoveError`] and leave the game untouched.
    pub fn attempt_move(&mut self, col: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            debug!(col, "move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            debug!(col, "move rejected: column out of range");
            return Err(MoveError::InvalidColumn(col));
        }
        let Some(row) = self.board.lowest_empty_row(col) else {
            debug!(col, "move rejected: column full");
            return Err(MoveError::ColumnFull(col));
        };

        let player = self.turn;
        self.board.place(row, col, player);
        self.moves_played += 1;
        debug!(?player, row, col, moves = self.moves_played, "piece placed");

        if let Some(found) = line::evaluate(&self.board, player, row, col) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(found);
            info!(?player, cells = ?found.cells(), "four in a row");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!(moves = self.moves_played, "board full, game drawn");
        } else {
            self.turn = player.other();
        }

        Ok(MoveReport {
            position: Position::new(row, col),
            player,
            status: self.status,
            winning_line: self.winning_line,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, ROWS};

    fn play(game: &mut Game, cols: &[usize]) {
        for &col in cols {
            game.attempt_move(col).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_turn(), Some(Player::Red));
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.legal_columns().len(), COLS);
    }

    #[test]
    fn test_attempt_move() {
        let mut game = Game::new();
        let report = game.attempt_move(3).unwrap();

        assert_eq!(report.position, Position::new(ROWS - 1, 3));
        assert_eq!(report.player, Player::Red);
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.winning_line, None);
        assert_eq!(game.board().get(ROWS - 1, 3), Cell::Red);
        assert_eq!(game.current_turn(), Some(Player::Blue));
    }

    #[test]
    fn test_invalid_column_is_noop() {
        let mut game = Game::new();
        play(&mut game, &[2]);
        let before = game.clone();

        assert_eq!(game.attempt_move(COLS), Err(MoveError::InvalidColumn(COLS)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_column_is_noop() {
        let mut game = Game::new();
        play(&mut game, &[0; ROWS]);
        let before = game.clone();

        assert_eq!(game.attempt_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(game, before);
        assert!(!game.legal_columns().contains(&0));
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = Game::new();
        // Red along the bottom, Blue stacks on top of each
        play(&mut game, &[0, 0, 1, 1, 2, 2]);
        let report = game.attempt_move(3).unwrap();

        assert_eq!(report.status, GameStatus::Won(Player::Red));
        let line = report.winning_line.unwrap();
        assert_eq!(line.direction(), Direction::Horizontal);
        assert_eq!(game.winning_line(), Some(line));
        assert_eq!(game.current_turn(), None);
        assert!(game.legal_columns().is_empty());
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let mut game = Game::new();
        play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        let before = game.clone();

        assert_eq!(game.attempt_move(4), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = Game::new();
        play(&mut game, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(game.is_terminal());

        game.restart();
        assert_eq!(game, Game::new());
        assert_eq!(game.board().occupied_count(), 0);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }
}
