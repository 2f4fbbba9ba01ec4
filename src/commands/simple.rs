//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. The session is saved after every
//! change, so an interrupted game resumes where it left off.

use crate::corpus::CorpusStore;
use crate::game::{self, GameSession, GameStatus, MAX_ATTEMPTS};
use crate::output::{emoji_summary, render_board};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the corpus has no words to draw from, or on an I/O
/// error reading input or writing the session save.
pub fn run_simple(store: &CorpusStore, session_path: &Path) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                SEVENLE - Guess the 7-letter word             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("You have {MAX_ATTEMPTS} attempts. After each guess:");
    println!("  - {} letter in the correct position", "green".green());
    println!("  - {} letter in the word, wrong position", "yellow".yellow());
    println!("  - {} letter not in the word\n", "gray".bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut rng = rand::rng();
    let mut session = match game::load_session(session_path)? {
        Some(session) => session,
        None => GameSession::start(store, &mut rng)?,
    };
    game::save_session(&session, session_path)?;

    loop {
        println!();
        for row in render_board(session.attempts()) {
            println!("  {row}");
        }
        println!();

        match session.status() {
            GameStatus::Won => {
                print_win_banner(&session);
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session.reset(store, &mut rng)?;
                game::save_session(&session, session_path)?;
            }
            GameStatus::Lost => {
                println!(
                    "{}",
                    format!("❌ Out of attempts! The word was {}", session.target())
                        .red()
                        .bold()
                );
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                session.reset(store, &mut rng)?;
                game::save_session(&session, session_path)?;
            }
            GameStatus::InProgress => {
                let attempts_left = session.remaining_attempts();
                let input = get_user_input(&format!("Guess ({attempts_left} left)"))?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" | "n" => {
                        session.reset(store, &mut rng)?;
                        game::save_session(&session, session_path)?;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => match session.submit_guess(&input) {
                        Ok(_) => {
                            game::save_session(&session, session_path)?;
                        }
                        Err(e) => {
                            println!("{}", format!("❌ {e}").red());
                        }
                    },
                }
            }
        }
    }
}

fn print_win_banner(session: &GameSession) {
    let turns = session.attempts().len();

    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  S O L V E D !  ✨ 🎉        ".bright_green().bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let performance = match turns {
        1 => "🏆 Incredible hole-in-one!",
        2 | 3 => "⭐ Outstanding!",
        4 | 5 => "💫 Well played!",
        6 | 7 => "✨ Good work!",
        _ => "👍 Got there!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Found {} in {} {}",
        session.target().text().bright_white().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    println!("\n{}\n", emoji_summary(session.attempts()));
}

fn ask_play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?;
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
