//! Error types for vocab-core.

use thiserror::Error;

/// Errors that can occur while loading a rule table.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid duration for level {level}: {value:?}")]
    InvalidDuration { level: u32, value: String },

    #[error("negative duration for level {level}: {value}")]
    NegativeDuration { level: u32, value: f64 },

    #[error("level must be at least 1, got {level}")]
    InvalidLevel { level: u32 },

    #[error("duplicate rule for level {level}")]
    DuplicateLevel { level: u32 },
}

/// Errors raised by the review state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
