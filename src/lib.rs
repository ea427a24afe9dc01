//! # Connect Four
//!
//! Two-player Connect Four on a 7x7 board, played in the terminal.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, win detection, game engine
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
