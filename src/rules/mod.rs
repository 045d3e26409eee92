//! Win conditions and game results.
//!
//! The session calls into these after every score commit; nothing here
//! mutates state.

pub mod engine;

pub use engine::{any_team_qualifies, evaluate, leader, reaches_target, GameResult};
