use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::QuizError;
use crate::models::{OPTIONS_PER_QUESTION, Question};
use crate::report::{Report, summarize};
use crate::session::{Phase, Session, Tick};

/// Which screen the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Loading,
    Unavailable,
    Welcome,
    Quiz,
    Result,
}

/// Presentation state wrapped around the current [`Session`].
///
/// Owns the question bank so that a restart can begin a fresh session over
/// the same questions.
pub struct App {
    config: SessionConfig,
    bank: Vec<Question>,
    session: Option<Session>,
    load_error: Option<String>,
    start_error: Option<String>,
    selected_option: usize,
    result_scroll: usize,
}

impl App {
    /// An app waiting for its question bank.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            bank: Vec::new(),
            session: None,
            load_error: None,
            start_error: None,
            selected_option: 0,
            result_scroll: 0,
        }
    }

    pub fn with_questions(questions: Vec<Question>, config: SessionConfig) -> Self {
        let mut app = Self::new(config);
        app.finish_loading(Ok(questions));
        app
    }

    pub fn state(&self) -> AppState {
        if self.load_error.is_some() {
            return AppState::Unavailable;
        }
        match self.session.as_ref().map(Session::phase) {
            None => AppState::Loading,
            Some(Phase::NotStarted) => AppState::Welcome,
            Some(Phase::InProgress) => AppState::Quiz,
            Some(Phase::Completed) => AppState::Result,
        }
    }

    pub fn finish_loading(&mut self, result: Result<Vec<Question>, QuizError>) {
        match result {
            Ok(questions) => {
                info!(count = questions.len(), "question bank ready");
                self.load_error = None;
                self.bank = questions;
                self.new_session();
            }
            Err(err) => {
                warn!(error = %err, "failed to load questions");
                self.load_error = Some(err.to_string());
                self.session = None;
            }
        }
    }

    /// Clear a load failure before fetching again.
    pub fn begin_retry(&mut self) {
        self.load_error = None;
        self.session = None;
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn start_error(&self) -> Option<&str> {
        self.start_error.as_deref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(Session::current_question)
    }

    pub fn current_question_number(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.current_index() + 1)
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::seconds_remaining)
    }

    pub fn is_answering_enabled(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_answering_enabled)
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn report(&self) -> Report {
        self.session
            .as_ref()
            .map_or_else(|| summarize(&[]), Session::summary)
    }

    pub fn skipped_count(&self) -> usize {
        self.session.as_ref().map_or(0, Session::skipped_count)
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % OPTIONS_PER_QUESTION;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option =
            (self.selected_option + OPTIONS_PER_QUESTION - 1) % OPTIONS_PER_QUESTION;
    }

    pub fn start_quiz(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.start() {
            Ok(()) => {
                self.start_error = None;
                self.selected_option = 0;
            }
            Err(err) => {
                warn!(error = %err, "could not start session");
                self.start_error = Some(err.to_string());
            }
        }
    }

    pub fn tick(&mut self) -> Tick {
        let Some(session) = self.session.as_mut() else {
            return Tick::Ignored;
        };
        let tick = session.tick();
        if matches!(tick, Tick::TimedOut | Tick::Completed) {
            self.selected_option = 0;
        }
        tick
    }

    pub fn submit_answer(&mut self) -> bool {
        self.answer_with(self.selected_option)
    }

    /// Answer with the option at `choice`, ignored while answering is locked.
    pub fn answer_with(&mut self, choice: usize) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let recorded = session.answer(choice);
        if recorded {
            self.selected_option = 0;
        }
        recorded
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.report().rows.len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Discard the current session and prepare a fresh one over the same bank.
    pub fn restart(&mut self) {
        if self.session.is_some() {
            self.new_session();
        }
    }

    fn new_session(&mut self) {
        self.session = Some(Session::new(self.bank.clone(), self.config));
        self.start_error = None;
        self.selected_option = 0;
        self.result_scroll = 0;
    }
}
