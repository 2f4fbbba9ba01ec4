//! TUI rendering with ratatui
//!
//! Visualizations for the guessing-game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Tile, WORD_LEN};
use crate::game::{GameStatus, GuessRecord, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 SEVENLE - Guess the 7-Letter Word")
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

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Green => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tile::Yellow => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tile::Gray => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LEN * 2);
    for (ch, tile) in record.guess.chars().zip(record.feedback.tiles()) {
        spans.push(Span::styled(format!(" {ch} "), tile_style(*tile)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for record in app.session.attempts() {
        lines.push(guess_line(record));
    }

    // Current input shown as a partially filled row
    if app.input_mode == InputMode::Typing && lines.len() < MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for i in 0..WORD_LEN {
            let cell = match app.input.chars().nth(i) {
                Some(ch) => Span::styled(
                    format!(" {ch} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(cell);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for _ in 0..WORD_LEN {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Letters used
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// Best feedback seen so far for each guessed letter, green beating
/// yellow beating gray.
fn letter_summary(app: &App) -> [Option<Tile>; 26] {
    let mut best: [Option<Tile>; 26] = [None; 26];
    for record in app.session.attempts() {
        for (ch, tile) in record.guess.bytes().zip(record.feedback.tiles()) {
            let idx = (ch - b'A') as usize;
            best[idx] = match (best[idx], *tile) {
                (Some(Tile::Green), _) => Some(Tile::Green),
                (_, Tile::Green) => Some(Tile::Green),
                (Some(Tile::Yellow), _) => Some(Tile::Yellow),
                (_, t) => Some(t),
            };
        }
    }
    best
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let best = letter_summary(app);

    let rows = [&b"ABCDEFGHIJKLM"[..], &b"NOPQRSTUVWXYZ"[..]];
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&ch| {
                    let style = match best[(ch - b'A') as usize] {
                        Some(tile) => tile_style(tile),
                        None => Style::default().fg(Color::White),
                    };
                    [
                        Span::styled(format!("{}", ch as char), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let letters = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(letters, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => match app.session.status() {
            GameStatus::Won => (
                " 🎉 YOU WON! 🎉 | Press 'n' for new game or 'q' to quit ",
                String::new(),
                Color::Green,
            ),
            _ => (
                " Game over | Press 'n' for new game or 'q' to quit ",
                String::new(),
                Color::Red,
            ),
        },
        InputMode::Typing => (
            " Type a 7-letter word and press Enter ",
            app.input.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.status() {
        GameStatus::InProgress => "Mode: Playing".to_string(),
        GameStatus::Won => "Mode: Won".to_string(),
        GameStatus::Lost => "Mode: Lost".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!("Attempts: {}/{}", app.attempts_used(), MAX_ATTEMPTS);
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Typing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
