//! Wordle TUI
//!
//! Play Wordle in the terminal: the official daily puzzle, animated tile
//! reveals, and a clickable on-screen keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Verdicts, Word};
//!
//! // Score a guess
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let verdicts = Verdicts::score(&guess, &answer);
//! println!("{verdicts}");
//! ```

// Core domain types
pub mod core;

// Game state machine and input handling
pub mod engine;

// Answer selection and the daily puzzle fetch
pub mod answer;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
