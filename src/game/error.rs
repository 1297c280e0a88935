//! Recoverable rejections from game operations
//!
//! None of these change session state; the caller surfaces them as transient
//! feedback.

/// Why an operation was not permitted in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalOperation {
    #[error("the game is over")]
    GameOver,

    #[error("the row is already full")]
    RowFull,

    #[error("there is nothing to delete")]
    RowEmpty,

    #[error("the row is not complete")]
    RowIncomplete,

    #[error("no hints remaining")]
    NoHintsRemaining,

    #[error("'{0}' is not a letter")]
    NotALetter(char),
}

/// Errors returned by session and game operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),

    #[error("all placed letters are already correct")]
    NoHintNeeded,

    #[error(transparent)]
    IllegalOperation(#[from] IllegalOperation),
}
