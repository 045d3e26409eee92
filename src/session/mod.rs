//! Game session: the round/turn state machine and its observable handle.
//!
//! - `GameSession`: synchronous state machine; every call applies fully or errors
//! - `SharedSession`: mutex-guarded handle driving the round timer and
//!   publishing snapshots
//! - `Feedback`: sound/haptic collaborators notified of judgments and time-up

pub mod feedback;
pub mod game;
pub mod record;
pub mod shared;

pub use feedback::{Feedback, RecordingFeedback, Signal, Silent};
pub use game::{
    CorrectOutcome, GameSession, GameSessionBuilder, PassOutcome, RoundOutcome, TickOutcome,
};
pub use record::{RoundEnding, RoundRecord, SessionSnapshot};
pub use shared::SharedSession;
