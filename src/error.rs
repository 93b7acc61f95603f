//! Error types for the quiz core and its collaborators.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// The question source could not supply records. Every variant means the
/// source is unavailable; callers may offer a retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question source request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("question source did not answer within {0:?}")]
    TimedOut(Duration),
    #[error("question source responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("question source returned malformed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted by the question bank builder in strict mode.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("requested {requested} questions but only {available} records are available")]
    InsufficientData { requested: usize, available: usize },
}

/// Errors emitted by session commands.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot start a session without questions")]
    EmptyBank,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question duration must be at least one second")]
    ZeroDuration,
    #[error("answer lock ({lock}s) must be shorter than the question duration ({duration}s)")]
    LockTooLong { lock: u32, duration: u32 },
    #[error("question limit must be at least one")]
    ZeroLimit,
    #[error("fetch timeout must be greater than zero")]
    ZeroTimeout,
}

/// Top-level error for loading and running a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
