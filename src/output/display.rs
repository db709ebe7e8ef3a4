//! Display functions for command results

use super::formatters::colored_tiles;
use crate::core::{Verdicts, Word};
use colored::Colorize;

/// Print a scored guess as tiles, emoji, and letter codes
pub fn print_score_result(guess: &Word, answer: &Word, verdicts: Verdicts) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        guess.text().bright_yellow().bold(),
        answer.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", colored_tiles(guess, verdicts));
    println!("\n{}  {}", verdicts.to_emoji(), verdicts);

    if verdicts.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
