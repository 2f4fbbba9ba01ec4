//! Word corpus acquisition and storage
//!
//! The write path runs rarely: the refresh gate decides whether the builder
//! should sweep the frequency provider and replace the stored corpus. The
//! read path serves the top-ranked pool each time a new game starts.

pub mod builder;
pub mod provider;
pub mod refresh;
pub mod store;

pub use builder::{CorpusBuilder, MAX_RESULTS, PREFIX_COUNT};
pub use provider::{DatamuseClient, FrequencySource, ProviderError, ProviderRecord};
pub use refresh::{RefreshOutcome, force_refresh, refresh_if_stale, refresh_if_stale_with};
pub use store::{CorpusStore, RefreshTracker, StoreError, WordEntry};
