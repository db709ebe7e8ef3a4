//! One-shot deadline registry
//!
//! The host owns a `Timers` and drives it from its event loop: schedule
//! a slot when an effect asks for it, sleep no longer than
//! `next_deadline`, then drain `due` slots. Deadlines are plain data
//! computed from a caller-supplied `Instant`, so tests never sleep.

use std::time::{Duration, Instant};

/// The jobs a session can have pending, at most one deadline each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSlot {
    /// Advance the reveal animation one letter
    Reveal,
    /// Leave the finished session for the leaderboard
    Redirect,
}

/// Pending one-shot deadlines
///
/// Scheduling a slot that is already armed replaces its deadline.
/// Firing a slot disarms it; re-arming is the caller's decision.
#[derive(Debug, Default)]
pub struct Timers {
    reveal: Option<Instant>,
    redirect: Option<Instant>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `slot` to fire `delay` after `now`
    pub fn schedule(&mut self, slot: TimerSlot, delay: Duration, now: Instant) {
        *self.deadline_mut(slot) = Some(now + delay);
    }

    /// Disarm `slot` if armed
    pub fn cancel(&mut self, slot: TimerSlot) {
        *self.deadline_mut(slot) = None;
    }

    /// Disarm everything (new game, quit)
    pub fn cancel_all(&mut self) {
        self.reveal = None;
        self.redirect = None;
    }

    /// Whether `slot` currently has a deadline
    #[must_use]
    pub const fn is_armed(&self, slot: TimerSlot) -> bool {
        self.deadline(slot).is_some()
    }

    /// Earliest armed deadline, if any
    ///
    /// The event loop uses this to bound how long it polls for input.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.reveal, self.redirect) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Disarm and return one slot whose deadline has passed
    ///
    /// Reveal fires before redirect when both are overdue. Call in a
    /// loop to drain everything due.
    pub fn due(&mut self, now: Instant) -> Option<TimerSlot> {
        for slot in [TimerSlot::Reveal, TimerSlot::Redirect] {
            if let Some(deadline) = self.deadline(slot)
                && deadline <= now
            {
                *self.deadline_mut(slot) = None;
                return Some(slot);
            }
        }
        None
    }

    const fn deadline(&self, slot: TimerSlot) -> Option<Instant> {
        match slot {
            TimerSlot::Reveal => self.reveal,
            TimerSlot::Redirect => self.redirect,
        }
    }

    fn deadline_mut(&mut self, slot: TimerSlot) -> &mut Option<Instant> {
        match slot {
            TimerSlot::Reveal => &mut self.reveal,
            TimerSlot::Redirect => &mut self.redirect,
        }
    }
}
