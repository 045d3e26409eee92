//! Round history and published session snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Phase, RoundState, Settings, TeamId, Teams};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEnding {
    /// The countdown expired.
    TimeUp,
    /// `end_round` was called before time ran out.
    Ended,
    /// A correct guess reached the target score.
    InstantWin,
}

/// Summary of a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round counter within the game.
    pub round_number: u32,
    pub team: TeamId,
    pub round_score: i64,
    pub passes_used: u32,
    /// Committed team score after the round was folded in.
    pub team_score: u32,
    pub ending: RoundEnding,
}

/// Read-only view of the session, published after every mutation.
///
/// Uses `im::Vector` for the history so publishing stays O(1) in the
/// number of rounds played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub teams: Teams,
    pub active_team: TeamId,
    pub round: RoundState,
    pub settings: Settings,
    pub category: Option<String>,
    pub pass_limit_reached: bool,
    /// `None` when passes are unlimited.
    pub remaining_passes: Option<u32>,
    pub history: Vector<RoundRecord>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.round.current_card.as_ref()
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.round.time_remaining
    }

    /// Progress of the countdown in `[0, 1]`, 1 meaning a full round left.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.settings.round_time_seconds == 0 {
            return 0.0;
        }
        f64::from(self.round.time_remaining) / f64::from(self.settings.round_time_seconds)
    }
}
