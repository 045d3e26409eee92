//! Whole-second round countdown.
//!
//! `Countdown` holds no clock of its own: something else delivers ticks
//! (see [`TickDriver`](super::TickDriver)) and the countdown decides what
//! they mean. Each tick decrements the remaining time. The tick that would
//! take it below zero reports [`Tick::Expired`] exactly once and stops.
//!
//! Every start, pause, resume and cancel moves the countdown to a new
//! *epoch*. Ticks are tagged with the epoch they were scheduled under, so a
//! tick that was already in flight when the timer was paused or cancelled
//! is recognized as stale and ignored.

use serde::{Deserialize, Serialize};

/// Countdown state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownState {
    #[default]
    Stopped,
    Running,
    Paused,
    Expired,
}

/// What a delivered tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One second elapsed; carries the time remaining.
    Elapsed(u32),
    /// Time ran out. Reported once per start.
    Expired,
    /// Not running, or the tick belongs to an older epoch.
    Ignored,
}

/// Pausable countdown with epoch-tagged ticks.
///
/// ```
/// use word_guess::timer::{Countdown, Tick};
///
/// let mut countdown = Countdown::new();
/// let epoch = countdown.start(2);
///
/// assert_eq!(countdown.tick(epoch), Tick::Elapsed(1));
/// assert_eq!(countdown.tick(epoch), Tick::Elapsed(0));
/// assert_eq!(countdown.tick(epoch), Tick::Expired);
/// assert_eq!(countdown.tick(epoch), Tick::Ignored);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    remaining: u32,
    state: CountdownState,
    epoch: u64,
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting down from `seconds`. Returns the new epoch.
    pub fn start(&mut self, seconds: u32) -> u64 {
        self.remaining = seconds;
        self.state = CountdownState::Running;
        self.bump()
    }

    /// Suspend ticking without touching the remaining time.
    ///
    /// Returns `false` if the countdown was not running.
    pub fn pause(&mut self) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }
        self.state = CountdownState::Paused;
        self.bump();
        true
    }

    /// Continue a paused countdown. Returns the new epoch.
    pub fn resume(&mut self) -> Option<u64> {
        if self.state != CountdownState::Paused {
            return None;
        }
        self.state = CountdownState::Running;
        Some(self.bump())
    }

    /// Stop ticking. Idempotent and safe when not running.
    pub fn cancel(&mut self) {
        if matches!(self.state, CountdownState::Running | CountdownState::Paused) {
            self.state = CountdownState::Stopped;
            self.bump();
        }
    }

    /// Apply one tick scheduled under `epoch`.
    pub fn tick(&mut self, epoch: u64) -> Tick {
        if epoch != self.epoch || self.state != CountdownState::Running {
            return Tick::Ignored;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            Tick::Elapsed(self.remaining)
        } else {
            self.state = CountdownState::Expired;
            self.bump();
            Tick::Expired
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Epoch that ticks must carry to be accepted.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn bump(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }
}
