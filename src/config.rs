//! Quiz configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_QUESTION_LIMIT: usize = 10;
pub const DEFAULT_QUESTION_DURATION_SECONDS: u32 = 30;
pub const DEFAULT_ANSWER_LOCK_SECONDS: u32 = 10;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-question timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    question_duration_seconds: u32,
    answer_lock_seconds: u32,
}

impl SessionConfig {
    /// Validate and build a timing configuration.
    ///
    /// `answer_lock_seconds` is how long answering stays disabled from the
    /// start of each question, so it has to leave some of the countdown open.
    pub fn new(question_duration_seconds: u32, answer_lock_seconds: u32) -> Result<Self, ConfigError> {
        if question_duration_seconds == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if answer_lock_seconds >= question_duration_seconds {
            return Err(ConfigError::LockTooLong {
                lock: answer_lock_seconds,
                duration: question_duration_seconds,
            });
        }

        Ok(Self {
            question_duration_seconds,
            answer_lock_seconds,
        })
    }

    pub fn question_duration_seconds(&self) -> u32 {
        self.question_duration_seconds
    }

    pub fn answer_lock_seconds(&self) -> u32 {
        self.answer_lock_seconds
    }

    /// Countdown value at or below which answering is allowed.
    pub fn unlock_threshold(&self) -> u32 {
        self.question_duration_seconds - self.answer_lock_seconds
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            question_duration_seconds: DEFAULT_QUESTION_DURATION_SECONDS,
            answer_lock_seconds: DEFAULT_ANSWER_LOCK_SECONDS,
        }
    }
}

/// Where raw question records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

/// Everything needed to load a question bank and run sessions over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: SourceLocation,
    pub limit: usize,
    /// Fail instead of running with fewer than `limit` questions.
    pub strict: bool,
    pub session: SessionConfig,
    /// Upper bound on one fetch from the question source, connect included.
    pub fetch_timeout: Duration,
}

impl QuizConfig {
    pub fn new(
        source: SourceLocation,
        limit: usize,
        strict: bool,
        session: SessionConfig,
    ) -> Result<Self, ConfigError> {
        if limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(Self {
            source,
            limit,
            strict,
            session,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        })
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Result<Self, ConfigError> {
        if fetch_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.fetch_timeout = fetch_timeout;
        Ok(self)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: SourceLocation::default(),
            limit: DEFAULT_QUESTION_LIMIT,
            strict: false,
            session: SessionConfig::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
