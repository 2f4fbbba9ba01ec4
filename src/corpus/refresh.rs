//! Freshness-gated corpus refresh
//!
//! Decides whether a rebuild is due and commits the result. Invoked
//! synchronously at startup; there is no background timer. All timestamps
//! are UTC instants, so the staleness comparison is timezone-safe.

use super::builder::{CorpusBuilder, MAX_RESULTS};
use super::provider::FrequencySource;
use super::store::{CorpusStore, RefreshTracker, StoreError};
use chrono::{DateTime, Duration, Utc};

/// Hours the corpus stays fresh after a successful rebuild
pub const REFRESH_INTERVAL_HOURS: i64 = 24;

/// What a refresh invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The corpus was rebuilt and replaced with this many entries
    Refreshed { words: usize },
    /// The corpus was fresh; no build was attempted
    Skipped,
    /// The build produced nothing; existing corpus and tracker left untouched
    Failed,
}

/// Rebuild the corpus if the last refresh is older than the staleness gate.
///
/// If no tracker exists yet, a baseline tracker at `now` is persisted first
/// and the rebuild proceeds (there is no prior corpus to keep serving). A
/// rebuild that yields an empty corpus leaves both the stored corpus and the
/// tracker timestamp untouched, so the next invocation retries instead of
/// waiting out a full interval.
///
/// # Errors
/// Returns `StoreError` only for persistence failures; provider failures are
/// absorbed into a partial or empty build.
pub fn refresh_if_stale<S: FrequencySource>(
    store: &CorpusStore,
    builder: &CorpusBuilder<S>,
    now: DateTime<Utc>,
) -> Result<RefreshOutcome, StoreError> {
    refresh_if_stale_with(store, builder, now, |_| {})
}

/// [`refresh_if_stale`] with a per-prefix progress hook for the CLI.
///
/// # Errors
/// Returns `StoreError` only for persistence failures.
pub fn refresh_if_stale_with<S: FrequencySource>(
    store: &CorpusStore,
    builder: &CorpusBuilder<S>,
    now: DateTime<Utc>,
    on_prefix: impl FnMut(&str),
) -> Result<RefreshOutcome, StoreError> {
    match store.tracker() {
        Some(tracker) => {
            let age = now - tracker.last_refreshed_at;
            if age < Duration::hours(REFRESH_INTERVAL_HOURS) {
                return Ok(RefreshOutcome::Skipped);
            }
        }
        None => {
            // Establish the freshness baseline before the first build
            store.set_tracker(RefreshTracker {
                last_refreshed_at: now,
            })?;
        }
    }

    rebuild(store, builder, now, on_prefix)
}

/// Rebuild unconditionally, bypassing the staleness gate. Used by the CLI
/// `refresh --force` path.
///
/// # Errors
/// Returns `StoreError` only for persistence failures.
pub fn force_refresh<S: FrequencySource>(
    store: &CorpusStore,
    builder: &CorpusBuilder<S>,
    now: DateTime<Utc>,
    on_prefix: impl FnMut(&str),
) -> Result<RefreshOutcome, StoreError> {
    rebuild(store, builder, now, on_prefix)
}

fn rebuild<S: FrequencySource>(
    store: &CorpusStore,
    builder: &CorpusBuilder<S>,
    now: DateTime<Utc>,
    on_prefix: impl FnMut(&str),
) -> Result<RefreshOutcome, StoreError> {
    let entries = builder.build_with_progress(MAX_RESULTS, on_prefix);

    if entries.is_empty() {
        return Ok(RefreshOutcome::Failed);
    }

    let words = store.replace_all(entries)?;
    store.set_tracker(RefreshTracker {
        last_refreshed_at: now,
    })?;
    Ok(RefreshOutcome::Refreshed { words })
}
