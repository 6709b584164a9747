//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Board, Mark, Move, Square, rules::win::winning_line};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Strictly Minimax - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status_style = match app.banner() {
        Some(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/1-9/click: move  h: hint  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Maps a terminal position to the board cell drawn there.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Move> {
    let board_area = screen_layout(area)[1];
    cell_areas(board_area)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Move::from_index)
}

fn screen_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Screen rectangles of the nine cells, row-major.
fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let mut cells = [Rect::default(); 9];
    for mv in Move::ALL {
        let x = board_area.x + mv.col() as u16 * (CELL_WIDTH + 1);
        let y = board_area.y + mv.row() as u16 * (CELL_HEIGHT + 1);
        cells[mv.index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
    }
    cells
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let line = [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| winning_line(board, mark));

    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    for row in 1..3u16 {
        let y = board_area.y + row * (CELL_HEIGHT + 1) - 1;
        let sep = Rect::new(board_area.x, y, BOARD_WIDTH, 1).intersection(area);
        draw_separator(frame, sep);
    }

    for (i, cell) in cell_areas(area).into_iter().enumerate() {
        let Some(mv) = Move::from_index(i) else {
            continue;
        };
        let highlight = if line.is_some_and(|l| l.contains(&mv)) {
            Some(Color::Green)
        } else if app.hint() == Some(mv) {
            Some(Color::Magenta)
        } else if app.cursor() == mv && !app.game().is_over() {
            Some(Color::White)
        } else {
            None
        };
        draw_cell(frame, cell, board, mv, highlight);
        if mv.col() < 2 {
            let sep = Rect::new(cell.x + CELL_WIDTH, cell.y, 1, CELL_HEIGHT).intersection(area);
            draw_separator_vertical(frame, sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, mv: Move, highlight: Option<Color>) {
    let number = mv.number().to_string();
    let (symbol, base_style) = match board.get(mv) {
        Square::Empty => (number.as_str(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match highlight {
        Some(bg) => base_style.bg(bg).fg(Color::Black),
        None => base_style,
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
