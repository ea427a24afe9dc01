//! Core Connect Four game logic: the board, the two players, four-in-a-row
//! detection and the game engine that drives them.

mod board;
mod engine;
mod line;
mod player;

pub use board::{Board, Cell, Position, COLS, ROWS};
pub use engine::{Game, GameStatus, MoveError, MoveReport};
pub use line::{evaluate, Direction, WinningLine, WIN_LENGTH};
pub use player::Player;
