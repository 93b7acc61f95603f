//! The quiz session state machine.
//!
//! A [`Session`] moves `NotStarted -> InProgress -> Completed` and never goes
//! back. It is driven by one-second [`Session::tick`] calls from an external
//! clock and by the user's [`Session::answer`] commands. Commands sent in a
//! phase that does not accept them are ignored and logged.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::models::{AnswerRecord, Question};
use crate::report::{Report, summarize};

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

/// What a single [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The session is not in progress.
    Ignored,
    /// The countdown moved by one second.
    Counted,
    /// The countdown reached the unlock threshold; answering is now allowed.
    Unlocked,
    /// The countdown ran out and the next question is up.
    TimedOut,
    /// The countdown ran out on the last question.
    Completed,
}

pub struct Session {
    id: Uuid,
    config: SessionConfig,
    phase: Phase,
    questions: Vec<Question>,
    current_index: usize,
    seconds_remaining: u32,
    answering_enabled: bool,
    answers: Vec<AnswerRecord>,
}

impl Session {
    /// Create a session over an immutable question bank.
    pub fn new(questions: Vec<Question>, config: SessionConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            phase: Phase::NotStarted,
            questions,
            current_index: 0,
            seconds_remaining: config.question_duration_seconds(),
            answering_enabled: false,
            answers: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen. `None` unless the session is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::InProgress => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_answering_enabled(&self) -> bool {
        self.answering_enabled
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Questions that timed out without an answer. Only final once completed.
    pub fn skipped_count(&self) -> usize {
        let presented = match self.phase {
            Phase::NotStarted => 0,
            Phase::InProgress => self.current_index,
            Phase::Completed => self.questions.len(),
        };
        presented.saturating_sub(self.answers.len())
    }

    pub fn summary(&self) -> Report {
        summarize(&self.answers)
    }

    /// Begin the first question.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::NotStarted {
            warn!(session = %self.id, phase = ?self.phase, "start ignored: session already started");
            return Ok(());
        }
        if self.questions.is_empty() {
            return Err(SessionError::EmptyBank);
        }

        self.phase = Phase::InProgress;
        self.current_index = 0;
        self.answers.clear();
        self.reset_countdown();
        info!(session = %self.id, questions = self.questions.len(), "session started");
        Ok(())
    }

    /// Account for one elapsed second.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::InProgress {
            warn!(session = %self.id, phase = ?self.phase, "tick ignored: session not in progress");
            return Tick::Ignored;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            info!(
                session = %self.id,
                question = self.current_index + 1,
                "question timed out without an answer"
            );
            self.advance();
            return match self.phase {
                Phase::Completed => Tick::Completed,
                _ => Tick::TimedOut,
            };
        }

        if !self.answering_enabled && self.seconds_remaining <= self.config.unlock_threshold() {
            self.answering_enabled = true;
            debug!(session = %self.id, question = self.current_index + 1, "answering unlocked");
            return Tick::Unlocked;
        }

        Tick::Counted
    }

    /// Record the option at `choice` for the current question and move on.
    ///
    /// Ignored while answering is locked, outside of `InProgress`, or when
    /// `choice` is not an option of the current question. Returns whether an
    /// answer was recorded.
    pub fn answer(&mut self, choice: usize) -> bool {
        if self.phase != Phase::InProgress {
            warn!(session = %self.id, phase = ?self.phase, "answer ignored: session not in progress");
            return false;
        }
        if !self.answering_enabled {
            debug!(session = %self.id, "answer ignored: answering is still locked");
            return false;
        }

        let question = &self.questions[self.current_index];
        let Some(selected) = question.options.get(choice) else {
            warn!(session = %self.id, choice, "answer ignored: no such option");
            return false;
        };

        let record = AnswerRecord::new(question, selected);
        debug!(
            session = %self.id,
            question_id = record.question_id,
            correct = record.is_correct,
            "answer recorded"
        );
        self.answers.push(record);
        self.advance();
        true
    }

    fn advance(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.reset_countdown();
        } else {
            self.phase = Phase::Completed;
            self.answering_enabled = false;
            info!(
                session = %self.id,
                answered = self.answers.len(),
                total = self.questions.len(),
                "session completed"
            );
        }
    }

    fn reset_countdown(&mut self) {
        self.seconds_remaining = self.config.question_duration_seconds();
        self.answering_enabled = self.config.answer_lock_seconds() == 0;
    }
}
