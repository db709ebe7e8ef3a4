//! On-screen keyboard geometry
//!
//! The key grid is pure data shared by rendering and mouse hit testing,
//! so a click always lands on exactly the key that was drawn.

use crate::engine::Token;
use ratatui::layout::Rect;

const TOP: &[u8] = b"QWERTYUIOP";
const HOME: &[u8] = b"ASDFGHJKL";
const BOTTOM: &[u8] = b"ZXCVBNM";

/// Number of key rows
pub const ROW_COUNT: usize = 3;

/// One key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKey {
    Letter(u8),
    Enter,
    Backspace,
}

impl ScreenKey {
    /// The game token this key produces
    #[must_use]
    pub const fn token(self) -> Token {
        match self {
            Self::Letter(letter) => Token::Letter(letter),
            Self::Enter => Token::Submit,
            Self::Backspace => Token::Delete,
        }
    }

    /// Width of the key in terminal cells, trailing gap included
    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            Self::Letter(_) | Self::Backspace => 4,
            Self::Enter => 6,
        }
    }

    /// Key cap text, without the trailing gap
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => format!(" {} ", letter as char),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => " ⌫ ".to_string(),
        }
    }
}

/// The key rows, top to bottom
#[must_use]
pub fn rows() -> [Vec<ScreenKey>; ROW_COUNT] {
    let letters = |row: &'static [u8]| row.iter().map(|&l| ScreenKey::Letter(l));

    let mut bottom = vec![ScreenKey::Enter];
    bottom.extend(letters(BOTTOM));
    bottom.push(ScreenKey::Backspace);

    [letters(TOP).collect(), letters(HOME).collect(), bottom]
}

/// Total width of a key row in cells
#[must_use]
pub fn row_width(row: &[ScreenKey]) -> u16 {
    row.iter().map(|key| key.width()).sum()
}

/// Left offset that centers `row` in `width` cells
#[must_use]
pub fn row_offset(width: u16, row: &[ScreenKey]) -> u16 {
    width.saturating_sub(row_width(row)) / 2
}

/// The key under an absolute terminal position
///
/// `area` is the region the key rows are drawn in, one row of keys per
/// terminal line starting at its top edge. Returns `None` for gaps and
/// positions outside the grid.
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<ScreenKey> {
    if row < area.y || column < area.x || column >= area.x.saturating_add(area.width) {
        return None;
    }

    let rows = rows();
    let keys = rows.get((row - area.y) as usize)?;

    let start = area.x + row_offset(area.width, keys);
    if column < start {
        return None;
    }

    let mut edge = start;
    for &key in keys {
        edge += key.width();
        if column < edge {
            return Some(key);
        }
    }
    None
}
