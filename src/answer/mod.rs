//! Answer selection
//!
//! The answer is picked once at startup and stays fixed for the whole
//! session. Daily play asks the official endpoint for today's solution
//! and quietly degrades to a fixed fallback word when offline.

pub mod daily;

use crate::core::Word;

/// Fallback answer when the daily fetch fails or the pool is empty
pub const FALLBACK_ANSWER: &str = "OUCHY";

/// Where a session's answer comes from
#[derive(Debug, Clone)]
pub enum AnswerSource {
    /// Today's official puzzle
    Daily,
    /// A caller-supplied word
    Fixed(Word),
    /// A uniform pick from the answer pool
    Random,
}

impl AnswerSource {
    /// Resolve the source into a concrete answer
    ///
    /// Called once per session. `Daily` degrades to [`FALLBACK_ANSWER`]
    /// on any fetch failure; `Random` does the same when the pool is
    /// empty.
    #[must_use]
    pub fn resolve(&self, pool: &[Word]) -> Word {
        match self {
            Self::Daily => match daily::fetch_today() {
                Ok((word, _)) => word,
                Err(err) => {
                    log::warn!("daily fetch failed, using fallback answer: {err}");
                    fallback()
                }
            },
            Self::Fixed(word) => word.clone(),
            Self::Random => {
                use rand::prelude::IndexedRandom;

                pool.choose(&mut rand::rng())
                    .cloned()
                    .unwrap_or_else(fallback)
            }
        }
    }
}

fn fallback() -> Word {
    Word::from_letters(*b"OUCHY")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fixed_resolves_to_itself() {
        let source = AnswerSource::Fixed(word("crane"));
        assert_eq!(source.resolve(&[]).text(), "CRANE");
    }

    #[test]
    fn random_picks_from_the_pool() {
        let pool = vec![word("slate")];
        assert_eq!(AnswerSource::Random.resolve(&pool).text(), "SLATE");

        let pool: Vec<Word> = ["crane", "slate", "irate"].iter().map(|w| word(w)).collect();
        let picked = AnswerSource::Random.resolve(&pool);
        assert!(pool.contains(&picked));
    }

    #[test]
    fn random_with_empty_pool_uses_fallback() {
        assert_eq!(AnswerSource::Random.resolve(&[]).text(), FALLBACK_ANSWER);
    }

    #[test]
    fn fallback_matches_const() {
        assert_eq!(fallback().text(), FALLBACK_ANSWER);
    }
}
