//! Thread-safe, observable session handle.
//!
//! `SharedSession` puts a `GameSession` behind one mutex and drives its
//! countdown from a `TickDriver`. User actions and timer ticks take the
//! same lock, so they never interleave. Ticks carry the countdown epoch
//! they were scheduled under and the session drops stale ones, so a tick
//! already in flight when the round is paused or ended cannot change
//! anything.
//!
//! After every mutation the handle publishes a `SessionSnapshot` on a
//! `tokio::sync::watch` channel.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::trace;

use super::game::{CorrectOutcome, GameSession, PassOutcome, RoundOutcome, TickOutcome};
use super::record::SessionSnapshot;
use crate::core::{SessionError, Settings, TeamId};
use crate::timer::{TickControl, TickDriver};

/// Cloneable handle to a session shared by the UI and the round timer.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Shared>,
}

struct Shared {
    core: Mutex<Core>,
    updates: watch::Sender<SessionSnapshot>,
}

struct Core {
    session: GameSession,
    driver: TickDriver,
}

impl SharedSession {
    /// Wrap `session`, spawning timer tasks onto `runtime`.
    #[must_use]
    pub fn new(session: GameSession, runtime: Handle) -> Self {
        let (updates, _) = watch::channel(session.snapshot());
        let inner = Arc::new(Shared {
            core: Mutex::new(Core {
                session,
                driver: TickDriver::new(runtime),
            }),
            updates,
        });

        let handle = Self { inner };
        handle.apply(|_| ());
        handle
    }

    /// Wrap `session` using the runtime of the calling task.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn on_current_runtime(session: GameSession) -> Self {
        Self::new(session, Handle::current())
    }

    /// Receive a snapshot after every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.updates.subscribe()
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.core.lock().session.snapshot()
    }

    /// Read the session under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R {
        f(&self.inner.core.lock().session)
    }

    pub fn start_game(&self) -> Result<(), SessionError> {
        self.apply(GameSession::start_game)
    }

    pub fn start_round(&self) -> Result<(), SessionError> {
        self.apply(GameSession::start_round)
    }

    pub fn mark_correct(&self) -> Result<CorrectOutcome, SessionError> {
        self.apply(GameSession::mark_correct)
    }

    pub fn mark_taboo(&self) -> Result<(), SessionError> {
        self.apply(GameSession::mark_taboo)
    }

    pub fn mark_pass(&self) -> Result<PassOutcome, SessionError> {
        self.apply(GameSession::mark_pass)
    }

    pub fn pause_game(&self) -> Result<(), SessionError> {
        self.apply(GameSession::pause_game)
    }

    pub fn resume_game(&self) -> Result<(), SessionError> {
        self.apply(GameSession::resume_game)
    }

    pub fn end_round(&self) -> Result<RoundOutcome, SessionError> {
        self.apply(GameSession::end_round)
    }

    pub fn quit_game(&self) {
        self.apply(GameSession::quit_game);
    }

    pub fn reset_game(&self) {
        self.apply(GameSession::reset_game);
    }

    pub fn update_settings(&self, settings: Settings) -> Result<(), SessionError> {
        self.apply(|s| s.update_settings(settings))
    }

    pub fn select_category(&self, title: &str) -> Result<usize, SessionError> {
        self.apply(|s| s.select_category(title))
    }

    pub fn rename_team(&self, team: TeamId, name: impl Into<String>) -> Result<(), SessionError> {
        let name = name.into();
        self.apply(|s| s.rename_team(team, name))
    }

    /// Whether a tick task is currently scheduled.
    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.inner.core.lock().driver.is_running()
    }

    fn apply<R>(&self, op: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut core = self.inner.core.lock();
        let out = op(&mut core.session);
        sync(&self.inner, &mut core);
        out
    }
}

/// Align the tick task with the countdown and publish a snapshot.
///
/// Must be called with the core lock held.
fn sync(shared: &Arc<Shared>, core: &mut Core) {
    if core.session.timer_running() {
        let epoch = core.session.timer_epoch();
        if core.driver.epoch() != Some(epoch) || !core.driver.is_running() {
            let weak = Arc::downgrade(shared);
            core.driver.start(epoch, move || on_tick(&weak, epoch));
        }
    } else {
        core.driver.stop();
    }
    shared.updates.send_replace(core.session.snapshot());
}

fn on_tick(shared: &Weak<Shared>, epoch: u64) -> TickControl {
    let Some(shared) = shared.upgrade() else {
        return TickControl::Stop;
    };
    let mut core = shared.core.lock();

    let outcome = core.session.tick(epoch);
    trace!(epoch, ?outcome, "tick applied");
    let control = match outcome {
        TickOutcome::Elapsed(_) => TickControl::Continue,
        TickOutcome::Ignored | TickOutcome::RoundEnded(_) => TickControl::Stop,
    };

    if !matches!(outcome, TickOutcome::Ignored) {
        sync(&shared, &mut core);
    }
    control
}
