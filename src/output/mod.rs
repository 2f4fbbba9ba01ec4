//! Terminal output formatting

pub mod board;

pub use board::{emoji_summary, empty_row, format_guess_row, render_board};
