//! # word-guess
//!
//! Round and turn engine for a two-team, single-device word guessing game
//! in the style of Taboo.
//!
//! Teams take turns. One player of the active team describes the word on
//! the current card while teammates guess, and the team has a fixed number
//! of seconds to get through as many cards as it can. Correct guesses score
//! a point, saying a forbidden word costs a point, and passing skips a card
//! within a per-round budget. The first team whose committed score reaches
//! the target wins, possibly in the middle of a round.
//!
//! ## Architecture
//!
//! - **Synchronous core**: `GameSession` is a plain state machine. It never
//!   spawns, sleeps or locks; ticks are delivered to it like any other call.
//!
//! - **Single writer**: `SharedSession` serializes user actions and timer
//!   ticks behind one mutex. Ticks are epoch-tagged so a cancelled timer can
//!   never mutate state.
//!
//! - **Injected collaborators**: card datasets (`CardSource`) and sound or
//!   haptic feedback (`Feedback`) are traits, so tests substitute fakes.
//!
//! ## Modules
//!
//! - `core`: RNG, teams, settings, phase, errors
//! - `cards`: Word cards, deck, dataset loading, categories
//! - `timer`: Countdown rules and the Tokio tick task
//! - `rules`: Win conditions
//! - `session`: State machine, feedback, shared handle

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    GameRng, LoadError, Phase, RoundState, SessionError, Settings, SettingsError, Team, TeamColor,
    TeamId, Teams,
};

pub use crate::cards::{
    Card, CardId, CardSource, Category, CategoryCatalog, CategoryStatus, Deck, JsonDirSource,
    StaticSource,
};

pub use crate::rules::GameResult;

pub use crate::timer::{Countdown, Tick, TickDriver};

pub use crate::session::{
    CorrectOutcome, Feedback, GameSession, GameSessionBuilder, PassOutcome, RoundOutcome,
    SessionSnapshot, SharedSession, Signal, TickOutcome,
};
