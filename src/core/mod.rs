//! Core types: RNG, teams, settings, phase, errors.
//!
//! Everything here is plain data. The state machine that mutates it lives
//! in `session`.

pub mod config;
pub mod error;
pub mod phase;
pub mod rng;
pub mod team;

pub use config::{Settings, UNLIMITED_PASSES};
pub use error::{LoadError, SessionError, SettingsError};
pub use phase::{Phase, RoundState};
pub use rng::GameRng;
pub use team::{Team, TeamColor, TeamId, Teams, TEAM_COUNT};
