//! Single-session game state machine
//!
//! A session moves through three phases:
//!
//! - `Accepting`: letters accumulate in the draft row until Submit
//!   commits a full one.
//! - `Revealing`: the submitted row flips one letter per reveal tick.
//!   Game tokens are ignored until the flip finishes.
//! - `Terminal`: the session is settled; only the host reacts from here.
//!
//! The session never touches the clock or the terminal. Anything with a
//! side effect is returned as an [`Effect`] for the host to carry out,
//! which keeps every transition a plain function call in tests.

use super::outcome::Outcome;
use super::token::Token;
use crate::core::{MAX_GUESSES, Verdict, Verdicts, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::mem;
use std::time::Duration;

/// Pause between letter flips while a row reveals
pub const REVEAL_STEP: Duration = Duration::from_millis(320);

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting letters for the draft row
    Accepting,
    /// Flipping the submitted row, `shown` letters revealed so far
    Revealing {
        /// Letters already flipped, counted from the left
        shown: usize,
        /// The submitted guess
        guess: Word,
        /// Its verdicts, computed once at submit
        verdicts: Verdicts,
    },
    /// Finished; game tokens are dead
    Terminal(Outcome),
}

/// A committed row on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub verdicts: Verdicts,
}

/// Work the host must do after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the reveal timer for [`REVEAL_STEP`] from now
    ScheduleReveal,
    /// The session just settled with this outcome
    SessionOver(Outcome),
}

/// One game of guessing a fixed answer
#[derive(Debug)]
pub struct Session {
    answer: Word,
    rows: Vec<Row>,
    draft: Vec<u8>,
    phase: Phase,
}

impl Session {
    /// Start a fresh session against `answer`
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            rows: Vec::new(),
            draft: Vec::new(),
            phase: Phase::Accepting,
        }
    }

    /// The word being guessed
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Committed rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The in-progress row as uppercase letters
    #[must_use]
    pub fn draft(&self) -> &[u8] {
        &self.draft
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Number of committed guesses
    #[must_use]
    pub fn guesses_taken(&self) -> usize {
        self.rows.len()
    }

    /// Whether the session has settled
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// The settled outcome, if any
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.phase {
            Phase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Best-known verdict per guessed letter across committed rows
    ///
    /// Correct beats Present beats Absent; a hint never downgrades.
    /// Letters not yet guessed are absent from the map.
    #[must_use]
    pub fn keyboard_hints(&self) -> FxHashMap<u8, Verdict> {
        let mut hints: FxHashMap<u8, Verdict> = FxHashMap::default();

        for row in &self.rows {
            for (i, &verdict) in row.verdicts.as_slice().iter().enumerate() {
                let entry = hints.entry(row.guess.letter_at(i)).or_insert(verdict);
                if rank(verdict) > rank(*entry) {
                    *entry = verdict;
                }
            }
        }

        hints
    }

    /// Apply one game token
    ///
    /// Tokens only act in `Accepting`; a reveal or a settled session
    /// swallows them. Letters past a full draft and Submit on a short
    /// draft are ignored.
    pub fn handle_token(&mut self, token: Token) -> Option<Effect> {
        if !matches!(self.phase, Phase::Accepting) {
            return None;
        }

        match token {
            Token::Letter(letter) => {
                if self.draft.len() < WORD_LENGTH {
                    self.draft.push(letter);
                }
                None
            }
            Token::Delete => {
                self.draft.pop();
                None
            }
            Token::Submit => self.submit(),
        }
    }

    /// Advance the reveal animation by one tick
    ///
    /// The first `WORD_LENGTH` ticks each flip one letter and re-arm the
    /// timer. The tick after the last flip commits the row and settles
    /// the session if it was won or the guesses ran out. Ticks outside
    /// `Revealing` are stray timer fires and do nothing.
    pub fn handle_reveal_tick(&mut self) -> Option<Effect> {
        match &mut self.phase {
            Phase::Revealing { shown, .. } if *shown < WORD_LENGTH => {
                *shown += 1;
                Some(Effect::ScheduleReveal)
            }
            Phase::Revealing { .. } => self.finalize_row(),
            Phase::Accepting | Phase::Terminal(_) => None,
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        let Ok(letters) = <[u8; WORD_LENGTH]>::try_from(self.draft.as_slice()) else {
            return None;
        };

        let guess = Word::from_letters(letters);
        let verdicts = Verdicts::score(&guess, &self.answer);
        log::debug!("row {} submitted: {guess} -> {verdicts}", self.rows.len() + 1);

        self.draft.clear();
        self.phase = Phase::Revealing {
            shown: 0,
            guess,
            verdicts,
        };
        Some(Effect::ScheduleReveal)
    }

    fn finalize_row(&mut self) -> Option<Effect> {
        let Phase::Revealing { guess, verdicts, .. } =
            mem::replace(&mut self.phase, Phase::Accepting)
        else {
            return None;
        };

        let won = verdicts.is_win();
        self.rows.push(Row { guess, verdicts });

        let outcome = if won {
            Some(Outcome::Win {
                guesses_taken: self.rows.len(),
            })
        } else if self.rows.len() == MAX_GUESSES {
            Some(Outcome::Loss {
                answer: self.answer.clone(),
            })
        } else {
            None
        };

        outcome.map(|outcome| {
            log::debug!("session settled after {} rows: {outcome:?}", self.rows.len());
            self.phase = Phase::Terminal(outcome.clone());
            Effect::SessionOver(outcome)
        })
    }
}

const fn rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Correct => 2,
        Verdict::Present => 1,
        Verdict::Absent => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(answer: &str) -> Session {
        Session::new(Word::new(answer).unwrap())
    }

    fn type_word(session: &mut Session, text: &str) {
        for letter in text.to_uppercase().bytes() {
            session.handle_token(Token::Letter(letter));
        }
    }

    /// Tick through the full reveal, returning the commit tick's effect
    fn finish_reveal(session: &mut Session) -> Option<Effect> {
        for _ in 0..WORD_LENGTH {
            assert_eq!(
                session.handle_reveal_tick(),
                Some(Effect::ScheduleReveal),
                "every flip tick re-arms the timer"
            );
        }
        session.handle_reveal_tick()
    }

    fn play_row(session: &mut Session, text: &str) -> Option<Effect> {
        type_word(session, text);
        assert_eq!(
            session.handle_token(Token::Submit),
            Some(Effect::ScheduleReveal)
        );
        finish_reveal(session)
    }

    #[test]
    fn new_session_is_empty_and_accepting() {
        let session = session("crane");

        assert_eq!(session.phase(), &Phase::Accepting);
        assert!(session.rows().is_empty());
        assert!(session.draft().is_empty());
        assert_eq!(session.guesses_taken(), 0);
        assert!(!session.is_over());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn letters_fill_the_draft() {
        let mut session = session("crane");

        type_word(&mut session, "sla");

        assert_eq!(session.draft(), b"SLA");
    }

    #[test]
    fn draft_capped_at_word_length() {
        let mut session = session("crane");

        type_word(&mut session, "slatesxyz");

        assert_eq!(session.draft().len(), WORD_LENGTH);
        assert_eq!(session.draft(), b"SLATE");
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut session = session("crane");
        type_word(&mut session, "slat");

        session.handle_token(Token::Delete);

        assert_eq!(session.draft(), b"SLA");
    }

    #[test]
    fn delete_on_empty_draft_is_a_noop() {
        let mut session = session("crane");

        assert_eq!(session.handle_token(Token::Delete), None);
        assert!(session.draft().is_empty());
        assert_eq!(session.phase(), &Phase::Accepting);
    }

    #[test]
    fn submit_needs_a_full_draft() {
        let mut session = session("crane");
        type_word(&mut session, "sla");

        assert_eq!(session.handle_token(Token::Submit), None);
        assert_eq!(session.phase(), &Phase::Accepting);
        assert_eq!(session.draft(), b"SLA");
    }

    #[test]
    fn submit_enters_revealing_with_nothing_shown() {
        let mut session = session("crane");
        type_word(&mut session, "slate");

        let effect = session.handle_token(Token::Submit);

        assert_eq!(effect, Some(Effect::ScheduleReveal));
        assert!(session.draft().is_empty());

        let Phase::Revealing { shown, guess, verdicts } = session.phase() else {
            panic!("expected Revealing, got {:?}", session.phase());
        };
        assert_eq!(*shown, 0);
        assert_eq!(guess.text(), "SLATE");
        assert_eq!(verdicts.to_string(), "--G-G");
    }

    #[test]
    fn reveal_ticks_flip_one_letter_each() {
        let mut session = session("crane");
        type_word(&mut session, "slate");
        session.handle_token(Token::Submit);

        for expected_shown in 1..=WORD_LENGTH {
            assert_eq!(
                session.handle_reveal_tick(),
                Some(Effect::ScheduleReveal)
            );
            let Phase::Revealing { shown, .. } = session.phase() else {
                panic!("still revealing");
            };
            assert_eq!(*shown, expected_shown);
        }
    }

    #[test]
    fn commit_tick_appends_row_and_returns_to_accepting() {
        let mut session = session("crane");

        let effect = play_row(&mut session, "slate");

        assert_eq!(effect, None);
        assert_eq!(session.phase(), &Phase::Accepting);
        assert_eq!(session.guesses_taken(), 1);

        let row = &session.rows()[0];
        assert_eq!(row.guess.text(), "SLATE");
        assert_eq!(row.verdicts, Verdicts::score(&row.guess, session.answer()));
    }

    #[test]
    fn tokens_ignored_while_revealing() {
        let mut session = session("crane");
        type_word(&mut session, "slate");
        session.handle_token(Token::Submit);
        session.handle_reveal_tick();

        assert_eq!(session.handle_token(Token::Letter(b'X')), None);
        assert_eq!(session.handle_token(Token::Delete), None);
        assert_eq!(session.handle_token(Token::Submit), None);

        assert!(session.draft().is_empty());
        let Phase::Revealing { shown, .. } = session.phase() else {
            panic!("token must not break the reveal");
        };
        assert_eq!(*shown, 1);
    }

    #[test]
    fn winning_guess_settles_the_session() {
        let mut session = session("crane");
        play_row(&mut session, "slate");
        play_row(&mut session, "brine");

        let effect = play_row(&mut session, "crane");

        assert_eq!(
            effect,
            Some(Effect::SessionOver(Outcome::Win { guesses_taken: 3 }))
        );
        assert!(session.is_over());
        assert_eq!(session.outcome(), Some(&Outcome::Win { guesses_taken: 3 }));
    }

    #[test]
    fn sixth_miss_is_a_loss_carrying_the_answer() {
        let mut session = session("crane");

        for text in ["aback", "debug", "fight", "hoist", "jumbo"] {
            assert_eq!(play_row(&mut session, text), None);
        }
        let effect = play_row(&mut session, "loyal");

        assert_eq!(
            effect,
            Some(Effect::SessionOver(Outcome::Loss {
                answer: Word::new("crane").unwrap()
            }))
        );
        assert!(matches!(session.outcome(), Some(Outcome::Loss { .. })));
        assert_eq!(session.guesses_taken(), MAX_GUESSES);
    }

    #[test]
    fn win_with_a_duplicate_letter_answer() {
        let mut session = session("savvy");

        assert_eq!(play_row(&mut session, "apple"), None);
        assert_eq!(play_row(&mut session, "vivid"), None);
        let effect = play_row(&mut session, "savvy");

        assert_eq!(
            effect,
            Some(Effect::SessionOver(Outcome::Win { guesses_taken: 3 }))
        );
    }

    #[test]
    fn repeated_identical_guesses_are_allowed() {
        let mut session = session("savvy");

        for _ in 0..MAX_GUESSES - 1 {
            assert_eq!(play_row(&mut session, "apple"), None);
        }
        let effect = play_row(&mut session, "apple");

        assert!(matches!(
            effect,
            Some(Effect::SessionOver(Outcome::Loss { .. }))
        ));
        assert_eq!(session.guesses_taken(), MAX_GUESSES);
    }

    #[test]
    fn winning_on_the_last_row_is_a_win() {
        let mut session = session("crane");

        for text in ["aback", "debug", "fight", "hoist", "jumbo"] {
            play_row(&mut session, text);
        }
        let effect = play_row(&mut session, "crane");

        assert_eq!(
            effect,
            Some(Effect::SessionOver(Outcome::Win { guesses_taken: 6 }))
        );
    }

    #[test]
    fn tokens_dead_after_terminal() {
        let mut session = session("crane");
        play_row(&mut session, "crane");

        assert_eq!(session.handle_token(Token::Letter(b'A')), None);
        assert_eq!(session.handle_token(Token::Submit), None);
        assert!(session.draft().is_empty());
        assert!(session.is_over());
    }

    #[test]
    fn stray_ticks_do_nothing() {
        let mut session = session("crane");
        assert_eq!(session.handle_reveal_tick(), None);

        play_row(&mut session, "crane");
        assert_eq!(session.handle_reveal_tick(), None);
        assert_eq!(session.outcome(), Some(&Outcome::Win { guesses_taken: 1 }));
    }

    #[test]
    fn guesses_taken_counts_committed_rows_only() {
        let mut session = session("crane");
        type_word(&mut session, "slate");
        session.handle_token(Token::Submit);

        assert_eq!(session.guesses_taken(), 0);

        finish_reveal(&mut session);
        assert_eq!(session.guesses_taken(), 1);
    }

    #[test]
    fn keyboard_hints_keep_the_best_verdict() {
        let mut session = session("crane");

        // CARTS vs CRANE: C correct, A and R present, T and S absent
        play_row(&mut session, "carts");
        let hints = session.keyboard_hints();
        assert_eq!(hints.get(&b'C'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'A'), Some(&Verdict::Present));
        assert_eq!(hints.get(&b'R'), Some(&Verdict::Present));
        assert_eq!(hints.get(&b'T'), Some(&Verdict::Absent));
        assert_eq!(hints.get(&b'Z'), None);

        // CRABS upgrades A and R to correct; C stays correct
        play_row(&mut session, "crabs");
        let hints = session.keyboard_hints();
        assert_eq!(hints.get(&b'C'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'A'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'R'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'T'), Some(&Verdict::Absent));
    }

    #[test]
    fn keyboard_hints_wait_for_the_commit() {
        let mut session = session("crane");
        type_word(&mut session, "carts");
        session.handle_token(Token::Submit);
        session.handle_reveal_tick();

        assert!(session.keyboard_hints().is_empty());
    }
}
