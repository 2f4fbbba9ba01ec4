//! Corpus inspection command

use crate::corpus::CorpusStore;
use anyhow::Result;
use colored::Colorize;

/// Print the top `count` corpus entries by frequency.
///
/// # Errors
///
/// Currently infallible; kept fallible for symmetry with the other commands.
pub fn run_words(store: &CorpusStore, count: usize) -> Result<()> {
    let top = store.top_by_frequency(count);

    if top.is_empty() {
        println!(
            "{}",
            "The corpus is empty. Run `sevenle refresh` to build it.".yellow()
        );
        return Ok(());
    }

    println!(
        "\n{} (of {} stored)\n",
        format!("Top {} words by frequency", top.len())
            .bright_cyan()
            .bold(),
        store.len()
    );

    for (i, entry) in top.iter().enumerate() {
        println!(
            "  {:>4}. {}  {:>10.3}",
            i + 1,
            entry.word.bright_white().bold(),
            entry.frequency
        );
    }
    println!();

    Ok(())
}
