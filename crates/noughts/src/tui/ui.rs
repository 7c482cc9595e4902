//! Stateless UI rendering.

use super::app::App;
use crate::theme::{ACCENT, PRIMARY, Palette, SECONDARY};
use noughts_engine::{GameMode, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole screen from app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Mode, symbol, scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(2), // Buttons and help
        ])
        .split(area);

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_panel(frame, chunks[1], app, &palette);
    draw_board(frame, chunks[2], app, &palette);

    let status_style = if app.game().status().winner().is_some() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    };
    let status = Paragraph::new(app.status_line())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(status, chunks[3]);

    draw_footer(frame, chunks[4], app, &palette);
}

fn draw_panel(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let game = app.game();
    let muted = Style::default().fg(palette.muted);

    let mut mode_line = vec![Span::styled("Mode: ", muted)];
    for mode in [GameMode::HumanVsHuman, GameMode::HumanVsComputer] {
        mode_line.push(selectable(mode.label(), mode == game.mode(), palette));
        mode_line.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(mode_line)];
    if game.mode() == GameMode::HumanVsComputer {
        let mut symbol_line = vec![Span::styled("Play as: ", muted)];
        for symbol in [Player::X, Player::O] {
            symbol_line.push(selectable(&symbol.to_string(), symbol == game.human_symbol(), palette));
            symbol_line.push(Span::raw(" "));
        }
        lines.push(Line::from(symbol_line));
    }
    lines.push(Line::from(vec![
        Span::styled(app.score_label(Player::X), Style::default().fg(ACCENT)),
        Span::raw("   "),
        Span::styled(app.score_label(Player::O), Style::default().fg(palette.o_mark)),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn selectable<'a>(label: &str, selected: bool, palette: &Palette) -> Span<'a> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(palette.muted))
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[i * 2], app, palette, cells);
        if i < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(palette.border));
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, cells: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, pos) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, palette, *pos);
        if i < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(palette.border));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty if app.is_clickable(pos) => ("·", Style::default().fg(palette.foreground)),
        Square::Empty => (" ", Style::default().fg(palette.muted)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(palette.x_mark).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(palette.o_mark).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.add_modifier(Modifier::REVERSED)
    } else if !app.is_clickable(pos) {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let buttons = Line::from(vec![
        Span::styled(
            " Reset Board (r) ",
            Style::default().bg(SECONDARY).fg(palette.background),
        ),
        Span::raw("  "),
        Span::styled(
            " New Game (n) ",
            Style::default().bg(PRIMARY).fg(palette.background),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} (t) ", app.theme().toggle_label()),
            Style::default().fg(palette.foreground),
        ),
    ]);
    let help = Line::from(Span::styled(
        "arrows/enter or 1-9 to play · m mode · x/o symbol · q quit",
        Style::default().fg(palette.muted),
    ));
    frame.render_widget(
        Paragraph::new(vec![buttons, help]).alignment(Alignment::Center),
        area,
    );
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
