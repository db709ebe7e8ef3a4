//! Interactive TUI mode

pub mod app;
pub mod keyboard;
pub mod rendering;

pub use app::{App, Screen, run_tui};
