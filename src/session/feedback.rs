//! Feedback signals for sound and haptics.
//!
//! The session fires these and moves on; implementations must not block.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A feedback signal emitted by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Correct,
    Wrong,
    Pass,
    PassRejected,
    RoundTimeUp,
}

/// Receiver of feedback signals (sound player, haptic engine, ...).
///
/// Every method defaults to doing nothing.
pub trait Feedback: Send + Sync {
    fn on_correct(&self) {}
    fn on_wrong(&self) {}
    fn on_pass(&self) {}
    fn on_pass_rejected(&self) {}
    fn on_round_time_up(&self) {}

    /// Dispatch a signal to the matching method.
    fn emit(&self, signal: Signal) {
        trace!(?signal, "feedback");
        match signal {
            Signal::Correct => self.on_correct(),
            Signal::Wrong => self.on_wrong(),
            Signal::Pass => self.on_pass(),
            Signal::PassRejected => self.on_pass_rejected(),
            Signal::RoundTimeUp => self.on_round_time_up(),
        }
    }
}

/// Discards every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Feedback for Silent {}

/// Records signals in order. Useful as a fake.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    signals: Mutex<Vec<Signal>>,
}

impl RecordingFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals received so far.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.lock().clone()
    }

    /// How many times `signal` was received.
    #[must_use]
    pub fn count(&self, signal: Signal) -> usize {
        self.signals.lock().iter().filter(|&&s| s == signal).count()
    }

    pub fn clear(&self) {
        self.signals.lock().clear();
    }
}

impl Feedback for RecordingFeedback {
    fn emit(&self, signal: Signal) {
        self.signals.lock().push(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct CountCorrect(AtomicU32);

    impl Feedback for CountCorrect {
        fn on_correct(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_emit_dispatches() {
        let fb = CountCorrect::default();
        fb.emit(Signal::Correct);
        fb.emit(Signal::Wrong);
        fb.emit(Signal::Correct);
        assert_eq!(fb.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_recording() {
        let fb = RecordingFeedback::new();
        fb.emit(Signal::Pass);
        fb.emit(Signal::PassRejected);
        fb.emit(Signal::Pass);

        assert_eq!(fb.signals(), vec![Signal::Pass, Signal::PassRejected, Signal::Pass]);
        assert_eq!(fb.count(Signal::Pass), 2);

        fb.clear();
        assert!(fb.signals().is_empty());
    }

    #[test]
    fn test_silent() {
        Silent.emit(Signal::RoundTimeUp);
    }
}
