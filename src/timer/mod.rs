//! Round timer.
//!
//! Split in two so the countdown rules can be tested without a runtime:
//!
//! - `Countdown`: remaining time, pause/resume, expiry, stale-tick rejection
//! - `TickDriver`: a cancellable Tokio task that delivers one tick per second

pub mod countdown;
pub mod driver;

pub use countdown::{Countdown, CountdownState, Tick};
pub use driver::{TickControl, TickDriver, TICK_PERIOD};
