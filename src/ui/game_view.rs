use crate::config::PlayerConfig;
use crate::game::{Cell, Game, GameStatus, Player, Position, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters per board cell
const CELL_WIDTH: u16 = 3;
/// Left margin before the first cell ("  ║")
const GRID_OFFSET: u16 = 3;
/// "  ║" + cells + " ║"
const BOARD_WIDTH: u16 = GRID_OFFSET + CELL_WIDTH * COLS as u16 + 2;
/// Preview, column numbers, top border, rows, bottom border
const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

/// Draw the whole game screen. Returns the area the board occupies so mouse
/// clicks can be mapped back to columns.
pub fn render(
    frame: &mut Frame,
    game: &Game,
    players: &PlayerConfig,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Status
            Constraint::Min(BOARD_HEIGHT + 1),    // Board
            Constraint::Length(3),                // Message
            Constraint::Length(3),                // Controls
        ])
        .split(frame.area());

    render_status(frame, game, players, chunks[0]);
    let board_area = centered(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    render_board(frame, game, selected_column, board_area);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

/// Column under screen coordinate (x, y), if it falls on the board.
pub fn column_at(board_area: Rect, x: u16, y: u16) -> Option<usize> {
    if y < board_area.y || y >= board_area.y + board_area.height {
        return None;
    }
    let grid_left = board_area.x + GRID_OFFSET;
    if x < grid_left {
        return None;
    }
    let col = ((x - grid_left) / CELL_WIDTH) as usize;
    (col < COLS).then_some(col)
}

/// Status bar text and colour for the current state of the game.
pub fn status_line(game: &Game, players: &PlayerConfig) -> (String, Color) {
    match game.status() {
        GameStatus::InProgress => {
            let player = game.current_turn().unwrap_or(Player::FIRST);
            (
                format!("{}'s Turn", players.name_of(player)),
                player_color(player),
            )
        }
        GameStatus::Won(player) => (
            format!("{} Won! Press Enter to play again.", players.name_of(player)),
            Color::Green,
        ),
        GameStatus::Draw => (
            "It's a Draw! Press Enter to play again.".to_string(),
            Color::Magenta,
        ),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_status(frame: &mut Frame, game: &Game, players: &PlayerConfig, area: Rect) {
    let (status, color) = status_line(game, players);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let board = game.board();
    let winning_line = game.winning_line();
    let turn = game.current_turn();
    let mut lines = Vec::new();

    // Piece about to be dropped, above the selected column
    let mut preview = vec![Span::raw("   ")];
    for col in 0..COLS {
        match turn {
            Some(player) if col == selected_column => preview.push(Span::styled(
                " ● ",
                Style::default().fg(player_color(player)),
            )),
            _ => preview.push(Span::raw("   ")),
        }
    }
    lines.push(Line::from(preview));

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && turn.is_some() {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Blue => (" ● ", Color::Blue),
            };
            let mut style = Style::default().fg(color);
            if winning_line.is_some_and(|line| line.contains(Position::new(row, col))) {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            } else if turn.is_some() && col == selected_column {
                style = style.bg(Color::Yellow);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/1-7/Click: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
