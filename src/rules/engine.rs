//! Win-condition evaluation.
//!
//! A team wins the moment its committed score reaches the target. Only one
//! team plays at a time, so two teams never qualify on the same commit;
//! when scores tie anyway (e.g. settings changed mid-game), the team with
//! the lower index is reported.

use serde::{Deserialize, Serialize};

use crate::core::{Settings, TeamId, Teams, TEAM_COUNT};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: TeamId,
    pub final_scores: [u32; TEAM_COUNT],
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        self.winner == team
    }
}

/// Whether `score` meets the target.
#[must_use]
pub fn reaches_target(score: u32, settings: &Settings) -> bool {
    score >= settings.target_score
}

/// Whether any team's committed score meets the target.
#[must_use]
pub fn any_team_qualifies(teams: &Teams, settings: &Settings) -> bool {
    teams.iter().any(|t| reaches_target(t.score, settings))
}

/// Team with the highest score, lower index on ties.
#[must_use]
pub fn leader(teams: &Teams) -> TeamId {
    teams
        .iter()
        .fold(None::<(TeamId, u32)>, |best, team| match best {
            Some((_, score)) if score >= team.score => best,
            _ => Some((team.id, team.score)),
        })
        .map_or(TeamId::default(), |(id, _)| id)
}

/// Evaluate the end-of-game result, if any team has won.
#[must_use]
pub fn evaluate(teams: &Teams, settings: &Settings) -> Option<GameResult> {
    any_team_qualifies(teams, settings).then(|| GameResult {
        winner: leader(teams),
        final_scores: teams.scores(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams_with(a: u32, b: u32) -> Teams {
        let mut teams = Teams::new();
        teams[TeamId(0)].score = a;
        teams[TeamId(1)].score = b;
        teams
    }

    #[test]
    fn test_reaches_target_inclusive() {
        let settings = Settings::default().with_target_score(10);
        assert!(!reaches_target(9, &settings));
        assert!(reaches_target(10, &settings));
        assert!(reaches_target(11, &settings));
    }

    #[test]
    fn test_leader() {
        assert_eq!(leader(&teams_with(3, 7)), TeamId(1));
        assert_eq!(leader(&teams_with(8, 2)), TeamId(0));
        assert_eq!(leader(&teams_with(5, 5)), TeamId(0));
    }

    #[test]
    fn test_evaluate() {
        let settings = Settings::default().with_target_score(10);

        assert!(evaluate(&teams_with(9, 9), &settings).is_none());

        let result = evaluate(&teams_with(4, 12), &settings).unwrap();
        assert!(result.is_winner(TeamId(1)));
        assert!(!result.is_winner(TeamId(0)));
        assert_eq!(result.final_scores, [4, 12]);
    }

    #[test]
    fn test_evaluate_checks_all_teams() {
        // Team 0 qualifies even when team 1 just played
        let settings = Settings::default().with_target_score(5);
        let result = evaluate(&teams_with(6, 1), &settings).unwrap();
        assert_eq!(result.winner, TeamId(0));
    }
}
