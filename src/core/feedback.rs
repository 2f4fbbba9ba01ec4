//! Guess feedback calculation and representation
//!
//! Feedback is an ordered row of seven tiles:
//! - Green (letter in correct position)
//! - Yellow (letter in word, wrong position)
//! - Gray (letter absent, or all its occurrences already matched)
//!
//! Tiles serialize as lowercase strings ("green"/"yellow"/"gray"), which is
//! the shape persisted in session saves and shown in guess records.

use super::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};

/// A single feedback tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tile {
    Green,
    Yellow,
    Gray,
}

/// Feedback for one guess: seven ordered tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback([Tile; WORD_LEN]);

impl Feedback {
    /// All greens (winning guess)
    pub const PERFECT: Self = Self([Tile::Green; WORD_LEN]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements the exact duplicate-letter rules in two passes:
    /// 1. First pass: mark all exact matches (greens) and remove each matched
    ///    letter from the available pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) from the
    ///    remaining pool; everything else stays gray
    ///
    /// The first pass runs to completion before the second begins. That
    /// ordering matters when a letter repeats in both words with different
    /// counts: a green later in the word must claim its letter before an
    /// earlier position can be considered for yellow.
    ///
    /// # Examples
    /// ```
    /// use sevenle::core::{Feedback, Tile, Word};
    ///
    /// let guess = Word::new("examply").unwrap();
    /// let target = Word::new("example").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// assert_eq!(feedback.tiles()[0], Tile::Green); // E
    /// assert_eq!(feedback.tiles()[6], Tile::Gray); // Y not in EXAMPLE
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut tiles = [Tile::Gray; WORD_LEN];
        let mut available = target.char_counts();

        // First pass: greens (exact position matches)
        // Allow: Index needed to access guess[i], target[i], and set tiles[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == target.char_at(i) {
                tiles[i] = Tile::Green;

                // Remove from available pool
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows (wrong position, letter still available)
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if tiles[i] == Tile::Gray {
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    if *count > 0 {
                        tiles[i] = Tile::Yellow;
                        *count -= 1;
                    }
                }
            }
        }

        Self(tiles)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.0.iter().all(|&t| t == Tile::Green)
    }

    /// Get the ordered tiles
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Count the number of green tiles
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Green).count()
    }

    /// Count the number of yellow tiles
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Yellow).count()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|tile| match tile {
                Tile::Green => '🟩',
                Tile::Yellow => '🟨',
                Tile::Gray => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_greens(), 7);
        assert_eq!(Feedback::PERFECT.count_yellows(), 0);
    }

    #[test]
    fn feedback_guess_equals_target_is_all_green() {
        for text in ["example", "anxiety", "zzzzzzz", "aaaaaaa"] {
            let w = word(text);
            assert_eq!(Feedback::score(&w, &w), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_disjoint_letters_is_all_gray() {
        let guess = word("abcdefg");
        let target = word("hijklmn");
        let feedback = Feedback::score(&guess, &target);

        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
        assert!(feedback.tiles().iter().all(|&t| t == Tile::Gray));
    }

    #[test]
    fn feedback_example_examply() {
        // EXAMPLY vs EXAMPLE: six exact matches, trailing Y absent
        let feedback = Feedback::score(&word("examply"), &word("example"));

        let tiles = feedback.tiles();
        assert!(tiles[..6].iter().all(|&t| t == Tile::Green));
        assert_eq!(tiles[6], Tile::Gray);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn feedback_green_claims_letter_before_yellow() {
        // Target has one E, at index 4. The guess also has an E at index 4
        // (green) plus an earlier E at index 0. A single left-to-right pass
        // would hand the index-0 E a yellow before reaching the green; the
        // two-pass algorithm must leave it gray.
        let guess = word("ezzzezz");
        let target = word("abcdefg");
        let tiles = *Feedback::score(&guess, &target).tiles();

        assert_eq!(tiles[4], Tile::Green);
        assert_eq!(tiles[0], Tile::Gray);
    }

    #[test]
    fn feedback_duplicate_guess_letters_beyond_target_count() {
        // BALONEY has a single E; the second E in the guess gets gray
        let guess = word("eyeball");
        let target = word("baloney");
        let tiles = *Feedback::score(&guess, &target).tiles();

        assert_eq!(tiles[0], Tile::Yellow); // E, first claim
        assert_eq!(tiles[1], Tile::Yellow); // Y
        assert_eq!(tiles[2], Tile::Gray); // E, pool exhausted
    }

    #[test]
    fn feedback_letter_count_conservation() {
        // Greens + yellows for any letter never exceed its count in target
        let guess = word("aaaabbb");
        let target = word("aabbccd");
        let feedback = Feedback::score(&guess, &target);
        let tiles = feedback.tiles();

        assert_eq!(tiles[0], Tile::Green);
        assert_eq!(tiles[1], Tile::Green);
        assert_eq!(tiles[2], Tile::Gray);
        assert_eq!(tiles[3], Tile::Gray);
        assert_eq!(tiles[4], Tile::Yellow);
        assert_eq!(tiles[5], Tile::Yellow);
        assert_eq!(tiles[6], Tile::Gray);

        for letter in [b'A', b'B'] {
            let target_count = target.chars().iter().filter(|&&c| c == letter).count();
            let matched = (0..WORD_LEN)
                .filter(|&i| guess.char_at(i) == letter && tiles[i] != Tile::Gray)
                .count();
            assert!(matched <= target_count);
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::score(&word("examply"), &word("example"));
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩🟩⬜");

        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_serializes_as_lowercase_tags() {
        let feedback = Feedback::score(&word("examply"), &word("example"));
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(
            json,
            r#"["green","green","green","green","green","green","gray"]"#
        );

        let back: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, feedback);
    }
}
