//! Ranked word corpus storage
//!
//! The store owns the full ranked word list plus the singleton refresh
//! tracker. Readers always observe a complete corpus: replacement swaps the
//! whole list under a write lock, and the on-disk JSON document is written
//! via a temp file renamed into place so no partial file is ever visible.

use crate::core::Word;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;
use thiserror::Error;

/// One ranked corpus entry: an uppercase 7-letter word and its usage frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub frequency: f64,
}

/// Singleton record tracking when the corpus was last rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTracker {
    pub last_refreshed_at: DateTime<Utc>,
}

/// Errors raised by corpus storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt corpus file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted document: entries sorted by frequency descending, plus the
/// optional refresh tracker.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoreState {
    entries: Vec<WordEntry>,
    tracker: Option<RefreshTracker>,
}

/// Corpus store backed by a JSON file.
pub struct CorpusStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl CorpusStore {
    /// Open the store at `path`, loading the existing corpus if present.
    ///
    /// A missing file yields an empty store; the file is created on the first
    /// write.
    ///
    /// # Errors
    /// Returns `StoreError` if an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let state = if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let mut state: StoreState = serde_json::from_reader(reader)?;
            // Enforce ordering and the word invariant on whatever was on disk
            state.entries = normalize(state.entries);
            state
        } else {
            StoreState::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    /// Whether the corpus is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the entire corpus with `entries`.
    ///
    /// Entries are sorted by frequency descending and deduplicated by word
    /// (highest-ranked occurrence wins); entries that are not valid 7-letter
    /// words are dropped. The swap happens under the write lock, so a
    /// concurrent `top_by_frequency` sees either the old corpus in full or
    /// the new one in full.
    ///
    /// Returns the number of entries actually stored.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting the new corpus fails.
    pub fn replace_all(&self, entries: Vec<WordEntry>) -> Result<usize, StoreError> {
        let entries = normalize(entries);
        let count = entries.len();

        let mut state = self.write();
        state.entries = entries;
        self.persist(&state)?;
        Ok(count)
    }

    /// The `n` highest-frequency entries, sorted descending.
    ///
    /// Returns fewer than `n` entries if the corpus is smaller; an empty
    /// corpus yields an empty vector.
    #[must_use]
    pub fn top_by_frequency(&self, n: usize) -> Vec<WordEntry> {
        self.read().entries.iter().take(n).cloned().collect()
    }

    /// The refresh tracker, if one has been recorded.
    #[must_use]
    pub fn tracker(&self) -> Option<RefreshTracker> {
        self.read().tracker
    }

    /// Record the refresh tracker and persist it.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting fails.
    pub fn set_tracker(&self, tracker: RefreshTracker) -> Result<(), StoreError> {
        let mut state = self.write();
        state.tracker = Some(tracker);
        self.persist(&state)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().expect("corpus store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreState> {
        self.state.write().expect("corpus store lock poisoned")
    }

    /// Write the full document atomically: serialize to a temp file in the
    /// target directory, then rename over the old file.
    fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer(BufWriter::new(&temp), state)?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Sort descending by frequency, drop invalid words, dedup keeping the
/// highest-ranked occurrence of each word.
fn normalize(mut entries: Vec<WordEntry>) -> Vec<WordEntry> {
    entries.retain(|entry| Word::new(&entry.word).is_ok());
    entries.sort_by(|a, b| {
        b.frequency
            .partial_cmp(&a.frequency)
            .unwrap_or(Ordering::Equal)
    });

    let mut seen = FxHashSet::default();
    entries.retain(|entry| seen.insert(entry.word.clone()));
    entries
}
