//! Command implementations

pub mod refresh;
pub mod simple;
pub mod words;

pub use refresh::run_refresh;
pub use simple::run_simple;
pub use words::run_words;
