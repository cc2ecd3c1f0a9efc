//! Error types for the mood machine.

use thiserror::Error;

use crate::mood::Mood;

/// Result type for mood machine operations.
pub type MoodResult<T> = Result<T, MoodError>;

/// Errors that can occur while driving the mood machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    /// A transition named a mood that has no registered state.
    #[error("no state registered for mood '{0}'")]
    UnregisteredMood(Mood),

    /// The session already ended; no further approaches are accepted.
    #[error("the session is over")]
    SessionOver,

    /// An approach name could not be parsed.
    #[error("invalid approach: {0}")]
    InvalidApproach(String),
}
