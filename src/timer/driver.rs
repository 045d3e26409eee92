//! Periodic tick delivery on a Tokio runtime.
//!
//! `TickDriver` owns at most one spawned task. The task waits one period,
//! calls the tick callback, and repeats until the callback asks it to stop
//! or the driver cancels it. Cancellation only guarantees the task stops
//! *scheduling*; a callback that is already running may still complete.
//! Callers that need a hard guarantee tag ticks with an epoch and check it
//! under the same lock as every other mutation (see `Countdown`).

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Period of the round timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Returned by the tick callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Spawns and cancels the periodic tick task.
#[derive(Debug)]
pub struct TickDriver {
    runtime: Handle,
    period: Duration,
    running: Option<Running>,
}

#[derive(Debug)]
struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
    epoch: u64,
}

impl TickDriver {
    /// Create a driver that spawns onto `runtime`.
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self::with_period(runtime, TICK_PERIOD)
    }

    #[must_use]
    pub fn with_period(runtime: Handle, period: Duration) -> Self {
        Self {
            runtime,
            period,
            running: None,
        }
    }

    /// Start delivering ticks for `epoch`, replacing any running task.
    pub fn start<F>(&mut self, epoch: u64, mut on_tick: F)
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        self.stop();

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = self.period;

        let handle = self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if token.is_cancelled() {
                            break;
                        }
                        trace!(epoch, "tick");
                        if on_tick() == TickControl::Stop {
                            break;
                        }
                    }
                }
            }
            debug!(epoch, "tick task finished");
        });

        debug!(epoch, ?period, "tick task started");
        self.running = Some(Running {
            cancel,
            handle,
            epoch,
        });
    }

    /// Stop the running task, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.cancel.cancel();
            debug!(epoch = running.epoch, "tick task cancelled");
        }
    }

    /// Whether a task is scheduled and has not finished.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|r| !r.cancel.is_cancelled() && !r.handle.is_finished())
    }

    /// Epoch of the running task.
    #[must_use]
    pub fn epoch(&self) -> Option<u64> {
        self.running.as_ref().map(|r| r.epoch)
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
