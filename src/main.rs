//! Sevenle - CLI
//!
//! Seven-letter word guessing game with TUI and CLI modes, backed by a
//! frequency-ranked corpus refreshed from the Datamuse API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sevenle::{
    commands::{run_refresh, run_simple, run_words},
    corpus::{CorpusStore, DatamuseClient},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "sevenle",
    about = "Seven-letter word guessing game backed by the Datamuse frequency corpus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the corpus and saved-game files
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Override the word API endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (no TUI)
    Simple,

    /// Rebuild the word corpus from the API
    Refresh {
        /// Rebuild even if the corpus was refreshed within the last 24 hours
        #[arg(short, long)]
        force: bool,
    },

    /// Show the top-ranked corpus words
    Words {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "25")]
        count: usize,
    },
}

fn make_client(endpoint: Option<&str>) -> DatamuseClient {
    match endpoint {
        Some(url) => DatamuseClient::with_endpoint(url),
        None => DatamuseClient::new(),
    }
}

/// Make sure the corpus exists and is reasonably fresh before starting a game.
fn ensure_corpus(store: &CorpusStore, endpoint: Option<&str>) -> Result<()> {
    run_refresh(store, make_client(endpoint), false)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus_path = cli.data_dir.join("corpus.json");
    let session_path = cli.data_dir.join("session.json");
    std::fs::create_dir_all(&cli.data_dir)?;

    let store = CorpusStore::open(&corpus_path)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            ensure_corpus(&store, cli.endpoint.as_deref())?;
            run_play_command(&store, &session_path)
        }
        Commands::Simple => {
            ensure_corpus(&store, cli.endpoint.as_deref())?;
            run_simple(&store, &session_path)
        }
        Commands::Refresh { force } => {
            run_refresh(&store, make_client(cli.endpoint.as_deref()), force)
        }
        Commands::Words { count } => run_words(&store, count),
    }
}

fn run_play_command(store: &CorpusStore, session_path: &Path) -> Result<()> {
    use sevenle::interactive::{App, run_tui};

    let app = App::new(store, session_path)?;
    run_tui(app)
}
