//! Error types for the activities.

use thiserror::Error;

/// Result type for activity operations.
pub type ActivityResult<T> = Result<T, ActivityError>;

/// Errors that can occur while playing an activity.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// Input arrived while controls are disabled (playback running or game over).
    #[error("input is disabled right now")]
    InputDisabled,

    /// The network animation is still running.
    #[error("the network is still processing")]
    AnimationInProgress,

    /// Testing needs more labelled examples.
    #[error("add at least {need} training examples before testing (have {have})")]
    NotEnoughExamples {
        /// Examples collected so far.
        have: usize,
        /// Examples required.
        need: usize,
    },

    /// The operation belongs to a different phase of the activity.
    #[error("only available during the {0} phase")]
    WrongPhase(&'static str),

    /// The quiz answer was submitted before picking a mode.
    #[error("pick HUMAN or AI first")]
    NoSelection,

    /// Unknown activity name.
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    /// Invalid choice or input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Decision tree error.
    #[error("{0}")]
    Tree(#[from] lab_core::LabError),
}
