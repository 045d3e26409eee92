//! Team identification and the fixed pair of teams in a session.
//!
//! ## TeamId
//!
//! Type-safe index into the team table. Team indices are 0-based.
//!
//! ## Teams
//!
//! Exactly [`TEAM_COUNT`] teams exist for the lifetime of a session.
//! Backed by a fixed array for O(1) access and indexable by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of teams in every session.
pub const TEAM_COUNT: usize = 2;

/// Team identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The team that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(((self.0 as usize + 1) % TEAM_COUNT) as u8)
    }

    /// Iterate over all team IDs.
    pub fn all() -> impl Iterator<Item = TeamId> {
        (0..TEAM_COUNT as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Display tag for a team. Rendering is up to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Purple,
    Orange,
    Blue,
    Green,
    Red,
    Pink,
}

/// One of the two competing teams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Committed score. Only changes at round end or on an instant win.
    pub score: u32,
    pub color: TeamColor,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            color,
        }
    }

    /// Fold a round's score into the committed score.
    ///
    /// Round scores may be negative; the committed score floors at zero.
    pub fn commit(&mut self, round_score: i64) {
        self.score = Self::provisional(self.score, round_score);
    }

    /// Committed score that would result from folding `round_score`.
    #[must_use]
    pub fn provisional(score: u32, round_score: i64) -> u32 {
        let total = i64::from(score) + round_score;
        u32::try_from(total.max(0)).unwrap_or(u32::MAX)
    }
}

/// The fixed pair of teams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    teams: [Team; TEAM_COUNT],
}

impl Default for Teams {
    fn default() -> Self {
        Self {
            teams: [
                Team::new(TeamId(0), "Team A", TeamColor::Purple),
                Team::new(TeamId(1), "Team B", TeamColor::Orange),
            ],
        }
    }
}

impl Teams {
    /// Create the default "Team A" / "Team B" pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over both teams in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Zero every team's score.
    pub fn reset_scores(&mut self) {
        for team in &mut self.teams {
            team.score = 0;
        }
    }

    /// Scores in index order.
    #[must_use]
    pub fn scores(&self) -> [u32; TEAM_COUNT] {
        [self.teams[0].score, self.teams[1].score]
    }
}

impl Index<TeamId> for Teams {
    type Output = Team;

    fn index(&self, team: TeamId) -> &Self::Output {
        &self.teams[team.index()]
    }
}

impl IndexMut<TeamId> for Teams {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        &mut self.teams[team.index()]
    }
}
