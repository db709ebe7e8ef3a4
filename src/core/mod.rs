//! Core domain types: words, verdicts, and the fixed game dimensions

mod verdict;
mod word;

pub use verdict::{Verdict, Verdicts};
pub use word::{Word, WordError};

/// Number of letters in every guess and answer
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses before the session is lost
pub const MAX_GUESSES: usize = 6;
