//! Embedded answer pool
//!
//! The answer list is compiled into the binary so random and offline play
//! never touch the filesystem. A custom pool can still be loaded from a
//! file at runtime.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
