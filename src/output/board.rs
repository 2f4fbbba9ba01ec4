//! Terminal board formatting
//!
//! Renders guess history as colored tile rows for the plain CLI mode.

use crate::core::{Tile, WORD_LEN};
use crate::game::{GuessRecord, MAX_ATTEMPTS};
use colored::Colorize;

/// Format one guess as a colored row of letter tiles.
#[must_use]
pub fn format_guess_row(record: &GuessRecord) -> String {
    record
        .guess
        .chars()
        .zip(record.feedback.tiles())
        .map(|(letter, tile)| {
            let cell = format!(" {letter} ");
            match tile {
                Tile::Green => cell.black().on_green().to_string(),
                Tile::Yellow => cell.black().on_yellow().to_string(),
                Tile::Gray => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A placeholder row for attempts not yet used.
#[must_use]
pub fn empty_row() -> String {
    vec![" · ".bright_black().to_string(); WORD_LEN].join(" ")
}

/// Render the full board: one row per guess, placeholders for the rest.
#[must_use]
pub fn render_board(attempts: &[GuessRecord]) -> Vec<String> {
    let mut rows: Vec<String> = attempts.iter().map(format_guess_row).collect();
    while rows.len() < MAX_ATTEMPTS {
        rows.push(empty_row());
    }
    rows
}

/// Summarize a finished game as shareable emoji rows.
#[must_use]
pub fn emoji_summary(attempts: &[GuessRecord]) -> String {
    attempts
        .iter()
        .map(|record| record.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
