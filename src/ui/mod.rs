//! Terminal UI: renders the game and turns key presses and mouse clicks into
//! moves.

mod app;
pub mod game_view;
mod terminal;

pub use app::App;
pub use terminal::{restore_screen, TerminalGuard};
