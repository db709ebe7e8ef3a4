//! Formatting utilities for terminal output

use crate::core::{Verdict, Verdicts, Word};
use colored::Colorize;

/// Render a scored guess as colored letter tiles
#[must_use]
pub fn colored_tiles(guess: &Word, verdicts: Verdicts) -> String {
    let tiles: Vec<String> = guess
        .letters()
        .iter()
        .enumerate()
        .map(|(j, &letter)| {
            let cell = format!(" {} ", letter as char);
            match verdicts.at(j) {
                Verdict::Correct => cell.black().on_green().bold(),
                Verdict::Present => cell.black().on_yellow().bold(),
                Verdict::Absent => cell.white().on_bright_black(),
            }
            .to_string()
        })
        .collect();

    tiles.join(" ")
}
