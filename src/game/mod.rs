//! Game session state and persistence

pub mod save;
pub mod session;

pub use save::{clear_session, load_session, save_session};
pub use session::{
    GameError, GameSession, GameStatus, GuessOutcome, GuessRecord, MAX_ATTEMPTS, POOL_SIZE,
};
