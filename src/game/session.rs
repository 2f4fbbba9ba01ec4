//! Game session state machine
//!
//! A session owns one hidden target word and the ordered guess history.
//! Guesses are scored, appended, and reported as
//! `{ attempts, game_over, win }`, a shape a web front end could consume
//! directly.

use crate::core::{Feedback, WORD_LEN, Word, WordError};
use crate::corpus::CorpusStore;
use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A finished game ends after this many guesses without a win
pub const MAX_ATTEMPTS: usize = 9;

/// Targets are drawn from the top of the corpus so puzzles stay fair
pub const POOL_SIZE: usize = 2500;

/// One scored guess. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Feedback,
}

/// Result of submitting a guess: the full history plus terminal flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessOutcome {
    pub attempts: Vec<GuessRecord>,
    pub game_over: bool,
    pub win: bool,
}

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors surfaced to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No words available to start a game; run a corpus refresh first")]
    EmptyPool,

    #[error("Guess must be {WORD_LEN} letters long")]
    InvalidGuessLength,

    #[error("Guess must contain only letters")]
    InvalidGuessCharacters,
}

/// One player's game: the hidden target and the guess history.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    target: Word,
    guesses: Vec<GuessRecord>,
}

impl GameSession {
    /// Start a new game with a target drawn uniformly from the store's
    /// top-ranked pool.
    ///
    /// The rng is injected so tests can seed it.
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the store has no usable words.
    pub fn start<R: Rng + ?Sized>(store: &CorpusStore, rng: &mut R) -> Result<Self, GameError> {
        let pool = store.top_by_frequency(POOL_SIZE);
        let entry = pool.choose(rng).ok_or(GameError::EmptyPool)?;

        // Stored entries satisfy the word invariant; anything else means the
        // corpus file was tampered with, which reads as "no usable words"
        let target = Word::new(&entry.word).map_err(|_| GameError::EmptyPool)?;
        Ok(Self::with_target(target))
    }

    /// Start a game against a known target. Used by tests and by session
    /// restore.
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::new(),
        }
    }

    /// Restore a session from a saved target and guess history.
    #[must_use]
    pub fn restore(target: Word, guesses: Vec<GuessRecord>) -> Self {
        Self { target, guesses }
    }

    /// The hidden target word.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The ordered guess history.
    #[must_use]
    pub fn attempts(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Submit a guess.
    ///
    /// Invalid input (wrong length, non-letters) is rejected without touching
    /// the session. Valid guesses are scored and appended even after a win or
    /// loss has been reached; callers are expected to stop soliciting guesses
    /// once `game_over` has been observed.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` or
    /// `GameError::InvalidGuessCharacters`; the guess history is unchanged on
    /// either.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        let guess = Word::new(raw.trim()).map_err(|e| match e {
            WordError::InvalidLength(_) => GameError::InvalidGuessLength,
            WordError::NonAlphabetic => GameError::InvalidGuessCharacters,
        })?;

        let feedback = Feedback::score(&guess, &self.target);
        let win = guess == self.target;

        self.guesses.push(GuessRecord {
            guess: guess.text().to_string(),
            feedback,
        });

        let game_over = win || self.guesses.len() >= MAX_ATTEMPTS;

        Ok(GuessOutcome {
            attempts: self.guesses.clone(),
            game_over,
            win,
        })
    }

    /// Discard the current game and draw a fresh target.
    ///
    /// # Errors
    /// Returns `GameError::EmptyPool` if the store has no usable words.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        store: &CorpusStore,
        rng: &mut R,
    ) -> Result<(), GameError> {
        *self = Self::start(store, rng)?;
        Ok(())
    }

    /// Current terminal/in-progress status.
    ///
    /// Won if any submitted guess matched the target exactly; lost once the
    /// attempt limit is reached without a match.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self
            .guesses
            .iter()
            .any(|record| record.guess == self.target.text())
        {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of guesses still available (zero once terminal).
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        match self.status() {
            GameStatus::InProgress => MAX_ATTEMPTS - self.guesses.len(),
            GameStatus::Won | GameStatus::Lost => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use crate::corpus::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(target: &str) -> GameSession {
        GameSession::with_target(Word::new(target).unwrap())
    }

    fn seeded_store(words: &[(&str, f64)]) -> (tempfile::TempDir, crate::corpus::CorpusStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::corpus::CorpusStore::open(dir.path().join("corpus.json")).unwrap();
        let entries = words
            .iter()
            .map(|(word, frequency)| WordEntry {
                word: (*word).to_string(),
                frequency: *frequency,
            })
            .collect();
        store.replace_all(entries).unwrap();
        (dir, store)
    }

    #[test]
    fn start_draws_from_pool() {
        let (_dir, store) = seeded_store(&[("EXAMPLE", 28.0), ("BETWEEN", 10.0)]);
        let mut rng = StdRng::seed_from_u64(7);

        let session = GameSession::start(&store, &mut rng).unwrap();
        assert!(matches!(session.target().text(), "EXAMPLE" | "BETWEEN"));
        assert!(session.attempts().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn start_is_deterministic_with_seeded_rng() {
        let (_dir, store) = seeded_store(&[("EXAMPLE", 28.0), ("BETWEEN", 10.0)]);

        let a = GameSession::start(&store, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = GameSession::start(&store, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.target(), b.target());
    }

    #[test]
    fn start_on_empty_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = crate::corpus::CorpusStore::open(dir.path().join("corpus.json")).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            GameSession::start(&store, &mut rng),
            Err(GameError::EmptyPool)
        );
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = session("example");

        let outcome = session.submit_guess("example").unwrap();
        assert!(outcome.win);
        assert!(outcome.game_over);
        assert_eq!(outcome.attempts.len(), 1);
        assert_eq!(outcome.attempts[0].feedback, Feedback::PERFECT);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn near_miss_keeps_game_in_progress() {
        let mut session = session("example");

        let outcome = session.submit_guess("examply").unwrap();
        assert!(!outcome.win);
        assert!(!outcome.game_over);
        assert_eq!(outcome.attempts[0].feedback.tiles()[6], Tile::Gray);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn guess_is_uppercased_in_record() {
        let mut session = session("example");
        let outcome = session.submit_guess("between").unwrap();
        assert_eq!(outcome.attempts[0].guess, "BETWEEN");
    }

    #[test]
    fn invalid_length_rejected_without_mutation() {
        let mut session = session("example");

        assert_eq!(
            session.submit_guess("short"),
            Err(GameError::InvalidGuessLength)
        );
        assert_eq!(
            session.submit_guess("toolonger"),
            Err(GameError::InvalidGuessLength)
        );
        assert!(session.attempts().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn non_letter_guess_rejected_without_mutation() {
        let mut session = session("example");

        assert_eq!(
            session.submit_guess("examp1e"),
            Err(GameError::InvalidGuessCharacters)
        );
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn invalid_length_error_message() {
        assert_eq!(
            GameError::InvalidGuessLength.to_string(),
            "Guess must be 7 letters long"
        );
    }

    #[test]
    fn nine_misses_lose_the_game() {
        let mut session = session("example");

        for i in 0..MAX_ATTEMPTS {
            let outcome = session.submit_guess("between").unwrap();
            assert!(!outcome.win);
            let expect_over = i == MAX_ATTEMPTS - 1;
            assert_eq!(outcome.game_over, expect_over, "attempt {}", i + 1);
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn win_on_final_attempt() {
        let mut session = session("example");

        for _ in 0..MAX_ATTEMPTS - 1 {
            session.submit_guess("between").unwrap();
        }
        let outcome = session.submit_guess("example").unwrap();

        assert!(outcome.win);
        assert!(outcome.game_over);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn terminal_state_still_accepts_guesses() {
        // Post-game submissions are not rejected; they keep getting recorded
        let mut session = session("example");
        session.submit_guess("example").unwrap();

        let outcome = session.submit_guess("between").unwrap();
        assert_eq!(outcome.attempts.len(), 2);
        // game_over is computed per guess: a post-win miss reports false
        assert!(!outcome.game_over);
        assert!(!outcome.win);
        // Status stays Won: a matching guess exists in the history
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn reset_discards_history() {
        let (_dir, store) = seeded_store(&[("EXAMPLE", 28.0)]);
        let mut rng = StdRng::seed_from_u64(3);

        let mut session = GameSession::start(&store, &mut rng).unwrap();
        session.submit_guess("between").unwrap();
        assert_eq!(session.attempts().len(), 1);

        session.reset(&store, &mut rng).unwrap();
        assert!(session.attempts().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn outcome_serializes_with_contract_field_names() {
        let mut session = session("example");
        let outcome = session.submit_guess("example").unwrap();

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["win"], serde_json::json!(true));
        assert_eq!(value["game_over"], serde_json::json!(true));
        assert_eq!(value["attempts"][0]["guess"], serde_json::json!("EXAMPLE"));
        assert_eq!(
            value["attempts"][0]["feedback"][0],
            serde_json::json!("green")
        );
    }
}
