//! Sevenle
//!
//! A seven-letter word guessing game backed by a frequency-ranked corpus
//! fetched from the Datamuse API.
//!
//! # Quick Start
//!
//! ```rust
//! use sevenle::core::{Feedback, Tile, Word};
//!
//! let guess = Word::new("example").unwrap();
//! let target = Word::new("examply").unwrap();
//!
//! let feedback = Feedback::score(&guess, &target);
//! assert_eq!(feedback.tiles()[0], Tile::Green);
//! ```

// Core domain types
pub mod core;

// Corpus acquisition and storage
pub mod corpus;

// Game session logic
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
