//! Game word representation
//!
//! A Word is exactly `WORD_LENGTH` ASCII uppercase letters. The session
//! answer and every committed guess are Words; the in-progress draft is not
//! (it becomes one on submit).

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A fixed-length uppercase word
///
/// Stores the text alongside a byte array for per-position scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Word;
    ///
    /// let word = Word::new("savvy").unwrap();
    /// assert_eq!(word.text(), "SAVVY");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, letters })
    }

    /// Build a Word from already-normalized uppercase letters
    ///
    /// The session draft only ever holds bytes that came out of token
    /// normalization, so no re-validation happens here.
    pub(crate) fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        let text = String::from_utf8_lossy(&letters).into_owned();
        Self { text, letters }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for verdict scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("SAVVY").unwrap();
        assert_eq!(word.text(), "SAVVY");
        assert_eq!(word.letters(), b"SAVVY");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("savvy").unwrap();
        assert_eq!(word.text(), "SAVVY");

        let word2 = Word::new("SaVvY").unwrap();
        assert_eq!(word2.text(), "SAVVY");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_from_letters_roundtrip() {
        let word = Word::from_letters(*b"APPLE");
        assert_eq!(word.text(), "APPLE");
        assert_eq!(word, Word::new("apple").unwrap());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(1), b'R');
        assert_eq!(word.letter_at(2), b'A');
        assert_eq!(word.letter_at(3), b'N');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("SPEED").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
    }

    #[test]
    fn word_letter_counts_all_same() {
        let word = Word::new("AAAAA").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'A'), Some(&5));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
