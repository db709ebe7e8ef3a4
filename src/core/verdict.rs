//! Guess scoring and per-letter verdicts
//!
//! Scoring a guess against the answer yields one verdict per position:
//! - Correct: right letter, right position
//! - Present: right letter, wrong position, not already accounted for
//! - Absent: letter not in the answer (after accounting)
//!
//! Duplicate letters are credited at most as many times as they occur in
//! the answer, with exact-position matches always resolved first.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter not in the answer
    Absent,
}

impl Verdict {
    /// Single-letter rendering: G (correct), Y (present), - (absent)
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile rendering
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The full verdict sequence for one guess, ordered to match the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdicts([Verdict; WORD_LENGTH]);

impl Verdicts {
    /// All positions correct (a winning guess)
    pub const ALL_CORRECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// Two-pass algorithm with exact-match priority:
    /// 1. First pass marks Correct positions and consumes the matched
    ///    answer letters.
    /// 2. Second pass scans remaining letters left-to-right, marking
    ///    Present while unconsumed occurrences remain, otherwise Absent.
    ///
    /// Pure and deterministic; invoked exactly once per submitted guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Verdicts, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let verdicts = Verdicts::score(&guess, &answer);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(verdicts.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to compare guess[i] with answer[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == answer.letter_at(i) {
                result[i] = Verdict::Correct;

                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, consuming what remains
        // Allow: index needed to check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Absent {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Verdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Check whether every position is Correct
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Get the verdict at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Get the verdicts as a slice, ordered to match the guess
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji tile string
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Verdicts, Word};
    ///
    /// let word = Word::new("savvy").unwrap();
    /// let verdicts = Verdicts::score(&word, &word);
    /// assert_eq!(verdicts.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Verdicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{}", v.letter())?;
        }
        Ok(())
    }
}
