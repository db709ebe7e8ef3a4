//! End-of-session outcomes and how to announce them

use crate::core::{MAX_GUESSES, Word};
use std::time::Duration;

/// Banner phrases for a win, indexed by guesses taken (fewer is better)
pub const WIN_PHRASES: [&str; MAX_GUESSES] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// How long a winning banner stays up before moving to the leaderboard
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1800);

/// How a finished session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The answer was found
    Win {
        /// Number of guesses taken, 1-based
        guesses_taken: usize,
    },
    /// All guesses used; carries the answer for the reveal
    Loss { answer: Word },
}

impl Outcome {
    /// Whether this outcome is a win
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
}

/// What the host shows once a session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Banner text
    pub message: String,
    /// Delay before leaving for the leaderboard, wins only
    pub redirect_after: Option<Duration>,
}

/// Build the end-of-session presentation
///
/// Wins pick a phrase by guesses taken, clamped to the last phrase.
/// Losses reveal the answer and never redirect.
///
/// # Examples
/// ```
/// use wordle_tui::core::Word;
/// use wordle_tui::engine::{Outcome, present};
///
/// let win = present(&Outcome::Win { guesses_taken: 1 });
/// assert_eq!(win.message, "Genius");
/// assert!(win.redirect_after.is_some());
///
/// let answer = Word::new("ouchy").unwrap();
/// let loss = present(&Outcome::Loss { answer });
/// assert_eq!(loss.message, "The word was OUCHY");
/// assert!(loss.redirect_after.is_none());
/// ```
#[must_use]
pub fn present(outcome: &Outcome) -> Presentation {
    match outcome {
        Outcome::Win { guesses_taken } => {
            let index = guesses_taken.saturating_sub(1).min(WIN_PHRASES.len() - 1);
            Presentation {
                message: WIN_PHRASES[index].to_string(),
                redirect_after: Some(REDIRECT_DELAY),
            }
        }
        Outcome::Loss { answer } => Presentation {
            message: format!("The word was {}", answer.text()),
            redirect_after: None,
        },
    }
}
