//! Corpus refresh command
//!
//! Drives the refresh pipeline with a progress bar over the prefix sweep.
//! The same entry point runs at startup (gated) and behind `refresh --force`.

use crate::corpus::{
    CorpusBuilder, CorpusStore, FrequencySource, PREFIX_COUNT, RefreshOutcome, force_refresh,
    refresh_if_stale_with,
};
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Run a corpus refresh.
///
/// Without `force`, the 24-hour staleness gate applies; with it, the corpus
/// is rebuilt unconditionally.
///
/// # Errors
///
/// Returns an error if the refreshed corpus cannot be persisted. Provider
/// failures do not error: they degrade to a partial or skipped refresh.
pub fn run_refresh<S: FrequencySource>(
    store: &CorpusStore,
    source: S,
    force: bool,
) -> Result<()> {
    let builder = CorpusBuilder::new(source);
    let now = Utc::now();

    // Progress bar over the 676-prefix sweep; it only advances if a build
    // actually runs
    let pb = ProgressBar::new(PREFIX_COUNT as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} prefixes | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let on_prefix = |prefix: &str| {
        pb.set_message(prefix.to_string());
        pb.inc(1);
    };

    let outcome = if force {
        force_refresh(store, &builder, now, on_prefix)?
    } else {
        refresh_if_stale_with(store, &builder, now, on_prefix)?
    };
    pb.finish_and_clear();

    match outcome {
        RefreshOutcome::Refreshed { words } => {
            println!(
                "{}",
                format!("✅ Corpus refreshed with {words} words.")
                    .green()
                    .bold()
            );
        }
        RefreshOutcome::Skipped => {
            println!("Corpus was refreshed less than 24 hours ago. Skipping update.");
        }
        RefreshOutcome::Failed => {
            println!(
                "{}",
                "⚠️  No words retrieved; keeping the existing corpus.".yellow()
            );
        }
    }

    Ok(())
}
