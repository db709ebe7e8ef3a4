//! Session engine: input tokens, the state machine, timers, outcomes
//!
//! Everything here is side-effect free. The host feeds tokens and timer
//! ticks in, and carries out the [`Effect`]s that come back.

pub mod outcome;
pub mod session;
pub mod timer;
pub mod token;

pub use outcome::{Outcome, Presentation, REDIRECT_DELAY, WIN_PHRASES, present};
pub use session::{Effect, Phase, REVEAL_STEP, Row, Session};
pub use timer::{TimerSlot, Timers};
pub use token::Token;
