use crate::config::{AppConfig, PlayerConfig};
use crate::game::{Game, GameStatus, MoveError, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game: Game,
    players: PlayerConfig,
    selected_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
    /// Where the board was last drawn, for mapping mouse clicks
    board_area: Rect,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game: Game::new(),
            players: config.players.clone(),
            selected_column: config.ui.start_column.min(COLS - 1),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
            message: None,
            board_area: Rect::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < COLS {
                    self.selected_column = col;
                    self.drop_piece(col);
                }
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = super::game_view::column_at(self.board_area, mouse.column, mouse.row)
        else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => self.selected_column = col,
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_piece(col);
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.message = Some("New game started!".to_string());
    }

    /// Drop into `col`, or start over if the last game has finished.
    fn drop_piece(&mut self, col: usize) {
        if self.game.is_terminal() {
            self.restart();
            return;
        }

        match self.game.attempt_move(col) {
            Ok(report) => {
                self.message = match report.status {
                    GameStatus::InProgress => None,
                    GameStatus::Won(player) => {
                        Some(format!("{} connects four!", self.players.name_of(player)))
                    }
                    GameStatus::Draw => Some("The board is full.".to_string()),
                };
            }
            Err(MoveError::ColumnFull(col)) => {
                self.message = Some(format!("Column {} is full!", col + 1));
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(
            frame,
            &self.game,
            &self.players,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
