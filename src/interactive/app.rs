//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::corpus::CorpusStore;
use crate::game::{self, GameSession, GameStatus, MAX_ATTEMPTS};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::{Path, PathBuf};

/// Application state
pub struct App<'a> {
    store: &'a CorpusStore,
    session_path: PathBuf,
    pub session: GameSession,
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Create the app, resuming a saved session if one exists.
    ///
    /// # Errors
    /// Returns an error if no session can be started (empty corpus) or the
    /// save file cannot be read.
    pub fn new(store: &'a CorpusStore, session_path: &Path) -> Result<Self> {
        let session = match game::load_session(session_path)? {
            Some(session) => session,
            None => GameSession::start(store, &mut rand::rng())?,
        };
        game::save_session(&session, session_path)?;

        let mut app = Self {
            store,
            session_path: session_path.to_path_buf(),
            session,
            input: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Typing,
            should_quit: false,
        };

        match app.session.status() {
            GameStatus::Won => {
                app.input_mode = InputMode::GameOver;
                app.add_message("Resumed a finished game - you won!", MessageStyle::Success);
                app.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                app.input_mode = InputMode::GameOver;
                let target = app.session.target().text().to_string();
                app.add_message(
                    &format!("Resumed a finished game - the word was {target}"),
                    MessageStyle::Error,
                );
                app.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                app.add_message(
                    &format!("Guess the {WORD_LEN}-letter word!"),
                    MessageStyle::Info,
                );
                app.add_message("Type a word and press Enter to guess.", MessageStyle::Info);
            }
        }

        Ok(app)
    }

    /// Submit the current input buffer as a guess.
    pub fn submit_input(&mut self) {
        let input = self.input.clone();

        match self.session.submit_guess(&input) {
            Ok(outcome) => {
                self.input.clear();
                self.save_quietly();

                if outcome.win {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    self.input_mode = InputMode::GameOver;

                    let celebration = match outcome.attempts.len() {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 | 3 => "🔥 MAGNIFICENT! 🔥",
                        4 | 5 => "✨ SPLENDID! ✨",
                        6 | 7 => "👏 GREAT JOB! 👏",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else if outcome.game_over {
                    self.stats.total_games += 1;
                    self.input_mode = InputMode::GameOver;

                    let target = self.session.target().text().to_string();
                    self.add_message(
                        &format!("Out of attempts! The word was {target}"),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    let left = self.session.remaining_attempts();
                    self.add_message(&format!("{left} attempts remaining"), MessageStyle::Info);
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a fresh game, discarding the current one.
    pub fn new_game(&mut self) {
        match self.session.reset(self.store, &mut rand::rng()) {
            Ok(()) => {
                self.save_quietly();
                self.input.clear();
                self.messages.clear();
                self.input_mode = InputMode::Typing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.session.attempts().len().min(MAX_ATTEMPTS)
    }

    fn save_quietly(&mut self) {
        if let Err(e) = game::save_session(&self.session, &self.session_path) {
            self.add_message(&format!("Could not save game: {e}"), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
