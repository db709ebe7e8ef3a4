//! Normalizing raw terminal input into game tokens
//!
//! The session only understands three actions: typing a letter, deleting
//! a letter, and submitting the row. Everything else the terminal can
//! produce (navigation keys, modified chords, key releases) is filtered
//! out here so the state machine never sees it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single game-relevant input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An uppercase ASCII letter (A-Z)
    Letter(u8),
    /// Commit the current row (Enter)
    Submit,
    /// Remove the last letter of the current row (Backspace)
    Delete,
}

impl Token {
    /// Map a raw key event to a token, or `None` for non-game input
    ///
    /// Only key presses count; release and repeat events are dropped.
    /// Letters are accepted in either case and normalized to uppercase.
    /// Chords with Ctrl or Alt are not game input and fall through to
    /// the host.
    #[must_use]
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        // Shift is part of ordinary typing, every other modifier is a chord
        let chord = !event.modifiers.difference(KeyModifiers::SHIFT).is_empty();

        match event.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && !chord => {
                Some(Self::Letter(c.to_ascii_uppercase() as u8))
            }
            KeyCode::Enter if !chord => Some(Self::Submit),
            KeyCode::Backspace if !chord => Some(Self::Delete),
            _ => None,
        }
    }
}
