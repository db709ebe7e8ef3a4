//! Fetching the daily puzzle from the official endpoint
//!
//! One blocking GET per session, done before the terminal enters raw
//! mode. The endpoint serves one puzzle per calendar date.

use crate::core::{Word, WordError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

const ENDPOINT_BASE: &str = "https://www.nytimes.com/svc/wordle/v2";
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// One day's puzzle as served by the upstream API
#[derive(Debug, Clone, Deserialize)]
pub struct DailyPuzzle {
    pub id: u64,
    pub solution: String,
    pub print_date: String,
    pub days_since_launch: u32,
    pub editor: String,
}

/// Why a daily fetch failed
#[derive(Debug)]
pub enum FetchError {
    /// Request, status, or decode failure
    Http(reqwest::Error),
    /// The served solution is not a playable word
    BadSolution(WordError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "daily puzzle request failed: {err}"),
            Self::BadSolution(err) => write!(f, "daily puzzle has an unplayable solution: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::BadSolution(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// Fetch today's puzzle and its answer word
///
/// # Errors
///
/// Fails on network or decode errors, a non-success status, or a served
/// solution that is not a five-letter word.
pub fn fetch_today() -> Result<(Word, DailyPuzzle), FetchError> {
    fetch_for(chrono::Local::now().date_naive())
}

/// Fetch the puzzle for a specific date
///
/// # Errors
///
/// Same failure modes as [`fetch_today`].
pub fn fetch_for(date: NaiveDate) -> Result<(Word, DailyPuzzle), FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let puzzle: DailyPuzzle = client
        .get(url_for(date))
        .send()?
        .error_for_status()?
        .json()?;

    let word = Word::new(puzzle.solution.as_str()).map_err(FetchError::BadSolution)?;
    log::info!(
        "daily puzzle {} for {} fetched",
        puzzle.id,
        puzzle.print_date
    );

    Ok((word, puzzle))
}

fn url_for(date: NaiveDate) -> String {
    format!("{ENDPOINT_BASE}/{}.json", date.format("%Y-%m-%d"))
}
