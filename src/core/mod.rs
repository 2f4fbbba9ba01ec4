//! Core domain types
//!
//! The word model and the feedback (scoring) algorithm.

mod feedback;
mod word;

pub use feedback::{Feedback, Tile};
pub use word::{WORD_LEN, Word, WordError};
