//! TUI rendering with ratatui
//!
//! Board, keyboard hints and status for the daily puzzle interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterHints, LetterState};
use crate::engine::{MAX_GUESSES, RoundState};
use crate::store::GameStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: GameStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header<S: GameStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(format!("🎯 DAILY WORDLE — {}", app.view.day))
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

fn render_board<S: GameStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES * 2);

    // Submitted guesses, colored by feedback
    for (guess, feedback) in app.view.guesses.iter().zip(&app.view.feedback) {
        let mut spans = Vec::with_capacity(10);
        for (i, letter) in guess.chars().enumerate() {
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(feedback.state_at(i)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    // The row being typed
    if app.input_mode == InputMode::Typing && app.view.guesses.len() < MAX_GUESSES {
        let mut spans = Vec::with_capacity(10);
        for i in 0..5 {
            let cell = app
                .input_buffer
                .chars()
                .nth(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
            spans.push(Span::styled(
                cell,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    // Remaining empty rows
    let rows_shown = app.view.guesses.len()
        + usize::from(app.input_mode == InputMode::Typing && app.view.guesses.len() < MAX_GUESSES);
    for _ in rows_shown..MAX_GUESSES {
        lines.push(
            Line::from(Span::styled(
                " ·   ·   ·   ·   · ",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: GameStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let hints = app.view.letter_hints();
    let rows = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

    let lines: Vec<Line> = rows
        .iter()
        .map(|row| keyboard_line(row, &hints))
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn keyboard_line(row: &str, hints: &LetterHints) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for letter in row.chars() {
        let style = hints.get(letter as u8).map_or_else(
            || Style::default().fg(Color::Gray),
            tile_style,
        );
        spans.push(Span::styled(
            letter.to_ascii_uppercase().to_string(),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans).alignment(Alignment::Center)
}

fn render_messages<S: GameStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_status<S: GameStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state_text = match app.view.state {
        RoundState::InProgress => "In progress".to_string(),
        RoundState::Solved => "Solved ✅".to_string(),
        RoundState::Failed => "Failed ❌".to_string(),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let guesses_text = format!("Guesses: {}/{MAX_GUESSES}", app.view.attempts);
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let points_text = app
        .view
        .points
        .map_or_else(String::new, |points| format!("Points: {points}"));
    let points = Paragraph::new(points_text).alignment(Alignment::Center);
    f.render_widget(points, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Type | Enter: Submit | Esc: Quit",
        InputMode::RoundOver => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
