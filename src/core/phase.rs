//! Session phase and per-round state.
//!
//! ## Phase
//!
//! ```text
//! Idle --start_game--> BetweenRounds --start_round--> Playing
//! Playing <--pause/resume--> Paused
//! Playing --expiry / end_round--> BetweenRounds | GameOver
//! Playing --mark_correct reaching target--> GameOver
//! any --quit_game--> Idle
//! ```
//!
//! ## RoundState
//!
//! Counters for the round in progress. Created at round start, folded into
//! the active team's score at round end, then discarded.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Where the session is in the game flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Paused,
    /// Reserved for presentation; no transition enters it.
    RoundOver,
    BetweenRounds,
    GameOver,
}

impl Phase {
    /// Whether a round timer may be running in this phase.
    #[must_use]
    pub const fn has_round(self) -> bool {
        matches!(self, Phase::Playing | Phase::Paused)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Playing => "Playing",
            Phase::Paused => "Paused",
            Phase::RoundOver => "RoundOver",
            Phase::BetweenRounds => "BetweenRounds",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// State of the round in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Correct guesses minus taboos. May go negative.
    pub round_score: i64,
    pub passes_used: u32,
    pub time_remaining: u32,
    pub current_card: Option<Card>,
}

impl RoundState {
    /// Fresh counters for a round of `round_time` seconds.
    #[must_use]
    pub fn new(round_time: u32) -> Self {
        Self {
            round_score: 0,
            passes_used: 0,
            time_remaining: round_time,
            current_card: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_has_round() {
        assert!(Phase::Playing.has_round());
        assert!(Phase::Paused.has_round());
        assert!(!Phase::Idle.has_round());
        assert!(!Phase::BetweenRounds.has_round());
        assert!(!Phase::GameOver.has_round());
    }

    #[test]
    fn test_new_round_state() {
        let round = RoundState::new(60);
        assert_eq!(round.round_score, 0);
        assert_eq!(round.passes_used, 0);
        assert_eq!(round.time_remaining, 60);
        assert!(round.current_card.is_none());
    }
}
