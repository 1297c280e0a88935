//! TUI rendering with ratatui
//!
//! Letter grid, on-screen keyboard, messages and the statistics panel.

use super::app::{App, MessageStyle};
use crate::core::LetterState;
use crate::game::{Cell, MAX_ATTEMPTS};
use crate::output::formatters::{KEYBOARD_ROWS, hints_label};
use crate::stats::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Grid and side panel
            Constraint::Length(if app.show_keyboard { 5 } else { 0 }),
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    if app.show_stats {
        render_stats(f, app, main_chunks[1]);
    } else {
        render_messages(f, app, main_chunks[1]);
    }

    if app.show_keyboard {
        render_keyboard(f, app, chunks[2]);
    }

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn state_style(state: Option<LetterState>) -> Style {
    match state {
        Some(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterState::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile_span(cell: Cell, is_cursor: bool, rejected: bool) -> Span<'static> {
    let letter = cell.letter().map_or('·', |c| c.to_ascii_uppercase());
    let mut style = state_style(cell.state());
    if cell.state().is_none() {
        if rejected {
            style = style.fg(Color::Red);
        } else if cell.is_pinned() {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if is_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
    }
    Span::styled(format!(" {letter} "), style)
}

fn render_grid<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = app.game.session();
    let cursor = session.cursor();

    let mut lines = vec![Line::from("")];
    for (row, cells) in session.grid().rows().enumerate() {
        let rejected = app.rejected_row == Some(row);
        let spans: Vec<Span> = cells
            .iter()
            .enumerate()
            .flat_map(|(col, &cell)| {
                let is_cursor = !session.is_over() && cursor.row == row && cursor.col == col;
                [tile_span(cell, is_cursor, rejected), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(secret) = session.revealed_secret() {
        lines.push(Line::from(Span::styled(
            secret.text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guess {}/{MAX_ATTEMPTS} ", cursor.row + 1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let keyboard = app.game.session().keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            state_style(keyboard.get(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let tracker = app.game.stats();
    let stats = tracker.stats();
    let bars = tracker.distribution_bars();

    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(bars.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let summary = Paragraph::new(vec![
        Line::from(format!(
            "{:^8}{:^8}{:^8}{:^8}",
            stats.games_played,
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(format!(
            "{:^8}{:^8}{:^8}{:^8}",
            "Played", "Win %", "Streak", "Max"
        )),
    ])
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center);
    f.render_widget(summary, rows[0]);

    for (bar, &area) in bars.iter().zip(&rows[1..]) {
        let color = if bar.highlighted {
            Color::Green
        } else {
            Color::DarkGray
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(bar.percent))
            .label(format!("{}: {}", bar.attempts, bar.count));
        f.render_widget(gauge, area);
    }
}

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let hints = Paragraph::new(hints_label(app.game.session().hints_remaining()))
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[0]);

    let help = Paragraph::new(
        "Enter: Submit | Tab: Hint | ^N: New | ^S: Stats | ^K: Keyboard | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
