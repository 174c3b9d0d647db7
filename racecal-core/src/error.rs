//! Error types for racecal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading schedules or building calendars.
#[derive(Error, Debug)]
pub enum RaceCalError {
    #[error("Schedule not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RaceCalError {
    fn from(err: serde_json::Error) -> Self {
        RaceCalError::Parse(err.to_string())
    }
}

/// Result type alias for racecal operations.
pub type RaceCalResult<T> = Result<T, RaceCalError>;
