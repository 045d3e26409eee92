//! Game settings.
//!
//! Recognized options:
//! - `round_time_seconds`: countdown duration for each round
//! - `target_score`: win threshold
//! - `max_pass_count`: per-round pass budget, `-1` for unlimited
//!
//! Settings are immutable during a round. The session only accepts new
//! settings while idle.

use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// Bounds for `round_time_seconds`.
pub const ROUND_TIME_RANGE: (u32, u32) = (1, 3600);

/// Bounds for `target_score`.
pub const TARGET_SCORE_RANGE: (u32, u32) = (1, 1000);

/// Largest finite pass budget.
pub const MAX_PASS_LIMIT: i32 = 99;

/// Sentinel for an unlimited pass budget.
pub const UNLIMITED_PASSES: i32 = -1;

/// Settings for a game session.
///
/// ## Example
///
/// ```
/// use word_guess::core::Settings;
///
/// let settings = Settings::default()
///     .with_round_time(90)
///     .with_target_score(30)
///     .unlimited_passes();
///
/// assert!(settings.validate().is_ok());
/// assert!(settings.passes_unlimited());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Countdown duration for each round, in seconds.
    pub round_time_seconds: u32,

    /// Committed score at which a team wins.
    pub target_score: u32,

    /// Passes allowed per round. Negative means unlimited.
    pub max_pass_count: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_time_seconds: 60,
            target_score: 50,
            max_pass_count: 3,
        }
    }
}

impl Settings {
    /// Set the round duration.
    #[must_use]
    pub fn with_round_time(mut self, seconds: u32) -> Self {
        self.round_time_seconds = seconds;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    /// Set a finite pass budget.
    #[must_use]
    pub fn with_max_passes(mut self, passes: i32) -> Self {
        self.max_pass_count = passes;
        self
    }

    /// Allow unlimited passes.
    #[must_use]
    pub fn unlimited_passes(mut self) -> Self {
        self.max_pass_count = UNLIMITED_PASSES;
        self
    }

    /// Whether the pass budget is unlimited.
    #[must_use]
    pub fn passes_unlimited(&self) -> bool {
        self.max_pass_count < 0
    }

    /// Whether `passes_used` exhausts the budget.
    #[must_use]
    pub fn pass_limit_reached(&self, passes_used: u32) -> bool {
        match u32::try_from(self.max_pass_count) {
            Ok(max) => passes_used >= max,
            Err(_) => false,
        }
    }

    /// Passes left in the round, `None` when unlimited.
    #[must_use]
    pub fn remaining_passes(&self, passes_used: u32) -> Option<u32> {
        u32::try_from(self.max_pass_count)
            .ok()
            .map(|max| max.saturating_sub(passes_used))
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (min, max) = ROUND_TIME_RANGE;
        if !(min..=max).contains(&self.round_time_seconds) {
            return Err(SettingsError::RoundTime {
                value: self.round_time_seconds,
                min,
                max,
            });
        }

        let (min, max) = TARGET_SCORE_RANGE;
        if !(min..=max).contains(&self.target_score) {
            return Err(SettingsError::TargetScore {
                value: self.target_score,
                min,
                max,
            });
        }

        if self.max_pass_count != UNLIMITED_PASSES
            && !(0..=MAX_PASS_LIMIT).contains(&self.max_pass_count)
        {
            return Err(SettingsError::MaxPassCount {
                value: self.max_pass_count,
                max: MAX_PASS_LIMIT,
            });
        }

        Ok(())
    }

    /// Parse and validate settings from JSON. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}
