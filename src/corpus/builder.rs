//! Corpus construction from the frequency provider
//!
//! Sweeps the full two-letter prefix space (aa..zz, 676 patterns) and
//! accumulates frequency-tagged 7-letter words into a ranked list. The sweep
//! is sequential and runs rarely, off any latency-sensitive path.

use super::provider::FrequencySource;
use super::store::WordEntry;
use crate::core::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Default number of entries a full build retains
pub const MAX_RESULTS: usize = 100_000;

/// Per-request candidate cap sent to the provider
pub const PER_PREFIX_CAP: usize = 1000;

/// Total number of two-letter prefixes swept
pub const PREFIX_COUNT: usize = 26 * 26;

/// Builds a ranked word corpus by driving a [`FrequencySource`].
pub struct CorpusBuilder<S: FrequencySource> {
    source: S,
}

impl<S: FrequencySource> CorpusBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build a corpus of up to `max_results` entries, sorted by frequency
    /// descending.
    ///
    /// Provider failures abort the sweep: whatever has been accumulated so
    /// far is sorted, truncated, and returned as a degraded partial corpus.
    /// Individual malformed records (non-alphabetic, wrong length, missing
    /// frequency tag) are silently dropped.
    #[must_use]
    pub fn build(&self, max_results: usize) -> Vec<WordEntry> {
        self.build_with_progress(max_results, |_| {})
    }

    /// Like [`build`](Self::build), with a hook invoked once per prefix
    /// before its query is sent. Used by the CLI to drive a progress bar.
    #[must_use]
    pub fn build_with_progress(
        &self,
        max_results: usize,
        mut on_prefix: impl FnMut(&str),
    ) -> Vec<WordEntry> {
        // First-seen-wins accumulator; the prefix order is deterministic so
        // duplicate resolution is reproducible
        let mut collected: FxHashMap<String, f64> = FxHashMap::default();

        for prefix in prefixes() {
            on_prefix(&prefix);

            // "ab?????": first two letters fixed, remaining five wildcards
            let pattern = format!("{}{}", prefix, "?".repeat(WORD_LEN - 2));

            let records = match self.source.lookup(&pattern, PER_PREFIX_CAP) {
                Ok(records) => records,
                // A failed prefix ends the sweep; the partial accumulation
                // stands in for the full corpus until the next refresh
                Err(_) => break,
            };

            for record in records {
                let Ok(word) = Word::new(&record.word) else {
                    continue;
                };
                let Some(frequency) = record.frequency() else {
                    continue;
                };
                collected.entry(word.text().to_string()).or_insert(frequency);
            }

            // Quota check after each batch ends the sweep early
            if collected.len() >= max_results {
                break;
            }
        }

        let mut entries: Vec<WordEntry> = collected
            .into_iter()
            .map(|(word, frequency)| WordEntry { word, frequency })
            .collect();

        entries.sort_by(|a, b| {
            b.frequency
                .partial_cmp(&a.frequency)
                .unwrap_or(Ordering::Equal)
        });
        entries.truncate(max_results);
        entries
    }
}

/// Every two-letter prefix in lexicographic order: "aa", "ab", .., "zz".
fn prefixes() -> impl Iterator<Item = String> {
    (b'a'..=b'z').flat_map(|first| {
        (b'a'..=b'z').map(move |second| String::from_utf8_lossy(&[first, second]).into_owned())
    })
}
