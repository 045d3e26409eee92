//! Error types.
//!
//! Pass-limit rejection and an exhausted deck are *not* errors; they are
//! reported through normal outcomes. Everything here is either a caller
//! mistake (wrong phase, locked settings) or a dataset problem.

use std::path::PathBuf;

use thiserror::Error;

use super::phase::Phase;

/// Failure to produce a usable card set for a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset '{0}' not found")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset '{dataset}' is malformed: {source}")]
    Malformed {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset '{0}' contains no cards")]
    Empty(String),
}

/// A settings value outside its allowed range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("round time must be between {min} and {max} seconds, got {value}")]
    RoundTime { value: u32, min: u32, max: u32 },

    #[error("target score must be between {min} and {max}, got {value}")]
    TargetScore { value: u32, min: u32, max: u32 },

    #[error("max pass count must be -1 (unlimited) or between 0 and {max}, got {value}")]
    MaxPassCount { value: i32, max: i32 },

    #[error("invalid settings document: {0}")]
    Parse(String),
}

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{op} is not valid while {phase}")]
    InvalidPhase { op: &'static str, phase: Phase },

    #[error("settings can only be changed while idle (currently {0})")]
    SettingsLocked(Phase),

    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("category '{0}' is not available")]
    CategoryUnavailable(String),

    #[error(transparent)]
    Dataset(#[from] LoadError),
}
