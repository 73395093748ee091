use std::time::Duration;
use thiserror::Error;

/// Everything the binary can fail with.
#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("could not load the dictionary")]
    Load(#[from] LoadError),

    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error("every attempt failed")]
    Retry(#[from] RetryError),
}

/// Settings that cannot drive a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word length must be at least 1")]
    ZeroWordLength,

    #[error("max guesses must be at least 1")]
    ZeroMaxGuesses,

    #[error("attempts must be at least 1")]
    ZeroAttempts,

    #[error("poll interval must be positive")]
    ZeroPollInterval,

    #[error("solution '{solution}' is not {expected} letters")]
    SolutionLength { solution: String, expected: usize },
}

/// Fatal at startup; never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("the dictionary contains the empty string at position {position} of {total}")]
    EmptyWord { position: usize, total: usize },

    #[error("could not read the dictionary file")]
    Io(#[from] std::io::Error),
}

/// Ends the current attempt; the retry wrapper decides what happens next.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttemptError {
    #[error("game did not accept input within {0:?}")]
    ReadinessTimeout(Duration),

    #[error("stuck: no legal guess left and the last row was never evaluated")]
    Stuck,
}

/// Raised while validating a candidate. Recovered inside the elimination
/// loop and never surfaced to callers of `next_guess`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("row {row} has {letters} letters but {evaluations} evaluations")]
    MalformedRow {
        row: usize,
        letters: usize,
        evaluations: usize,
    },
}

#[derive(Debug, Error)]
pub enum RetryError {
    #[error("failed permanently after {attempts} attempts: {last}")]
    PermanentFailure { attempts: u32, last: String },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("could not write the outcome")]
    Io(#[from] std::io::Error),
}
