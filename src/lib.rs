//! # timed-quiz
//!
//! A timed multiple-choice quiz for the terminal. Questions are derived from
//! a remote list of records, each question runs against a countdown that
//! keeps answers locked for its first seconds, and the session ends with a
//! scoring report.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     Quiz::new(QuizConfig::default())?.run().await
//! }
//! ```
//!
//! The core can also be driven without a terminal:
//!
//! ```rust
//! use timed_quiz::{build_question_bank, RawRecord, Session, SessionConfig};
//!
//! let records = vec![RawRecord::new(1, "sunt aut facere", "quia et suscipit suscipit")];
//! let mut session = Session::new(build_question_bank(&records, 10), SessionConfig::default());
//! session.start().unwrap();
//! for _ in 0..10 {
//!     session.tick();
//! }
//! assert!(session.answer(0));
//! assert_eq!(session.summary().total, 1);
//! ```

mod app;
pub mod config;
mod data;
pub mod error;
pub mod logging;
mod models;
mod report;
mod session;
pub mod terminal;
pub mod timer;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub use app::{App, AppState};
pub use config::{QuizConfig, SessionConfig, SourceLocation};
pub use data::{
    HttpSource, JsonFileSource, QuestionSource, build_question_bank, build_question_bank_strict,
    generate_options, generate_options_with, source_for,
};
pub use error::{BankError, ConfigError, QuizError, SessionError, SourceError};
pub use models::{AnswerOption, AnswerRecord, OPTIONS_PER_QUESTION, Question, RawRecord};
pub use report::{Report, ReportRow, summarize};
pub use session::{Phase, Session, Tick};

use terminal::TerminalGuard;
use timer::{TICK_PERIOD, Ticker};

type LoadTask = JoinHandle<Result<Vec<Question>, QuizError>>;

/// Fetch records once and build the question bank the configuration asks for.
///
/// A fetch still pending after `config.fetch_timeout` fails with
/// [`SourceError::TimedOut`].
pub async fn load_questions(
    source: &dyn QuestionSource,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let records = tokio::time::timeout(config.fetch_timeout, source.fetch())
        .await
        .map_err(|_| SourceError::TimedOut(config.fetch_timeout))??;
    let questions = if config.strict {
        build_question_bank_strict(&records, config.limit)?
    } else {
        build_question_bank(&records, config.limit)
    };
    Ok(questions)
}

/// A quiz bound to a question source, run in the terminal.
pub struct Quiz {
    config: QuizConfig,
    source: Arc<dyn QuestionSource>,
    app: App,
}

impl Quiz {
    /// Create a quiz reading from the source named in `config`.
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        let source = source_for(&config.source, config.fetch_timeout)?;
        Ok(Self::with_source(config, Arc::from(source)))
    }

    pub fn with_source(config: QuizConfig, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            app: App::new(config.session),
            config,
            source,
        }
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run the quiz in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self).await
    }

    /// Show the loading screen and fetch in the background, so input is
    /// still handled while the source is slow.
    fn spawn_load(&mut self) -> LoadTask {
        self.app.begin_retry();
        let source = Arc::clone(&self.source);
        let config = self.config.clone();
        tokio::spawn(async move { load_questions(source.as_ref(), &config).await })
    }
}

/// Only present while a fetch is running.
async fn next_load(loading: &mut Option<LoadTask>) -> Result<Vec<Question>, QuizError> {
    match loading {
        Some(task) => match task.await {
            Ok(result) => result,
            Err(err) => Err(QuizError::Io(io::Error::other(err))),
        },
        None => std::future::pending().await,
    }
}

/// Only present while a session is in progress.
async fn next_tick(ticker: &mut Option<Ticker>) -> Option<()> {
    match ticker {
        Some(ticker) => ticker.tick().await,
        None => std::future::pending().await,
    }
}

/// Keep the clock alive exactly while a question is on screen. Dropping the
/// ticker aborts its task.
fn sync_ticker(state: AppState, ticker: &mut Option<Ticker>, period: Duration) {
    match (state, ticker.is_some()) {
        (AppState::Quiz, false) => *ticker = Some(Ticker::start(period)),
        (state, true) if state != AppState::Quiz => *ticker = None,
        _ => {}
    }
}

async fn run_event_loop(term: &mut TerminalGuard, quiz: &mut Quiz) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut ticker: Option<Ticker> = None;
    let mut loading = Some(quiz.spawn_load());

    loop {
        sync_ticker(quiz.app.state(), &mut ticker, TICK_PERIOD);
        term.draw(|frame| ui::render(frame, &quiz.app))?;

        tokio::select! {
            result = next_load(&mut loading) => {
                loading = None;
                quiz.app.finish_loading(result);
            }
            Some(()) = next_tick(&mut ticker) => {
                let tick = quiz.app.tick();
                debug!(?tick, remaining = quiz.app.seconds_remaining(), "tick");
            }
            event = events.next() => {
                let Some(event) = event else { break };
                let Event::Key(key) = event? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match handle_input(&mut quiz.app, key) {
                    Action::Continue => {}
                    Action::Retry => {
                        if loading.is_none() {
                            loading = Some(quiz.spawn_load());
                        }
                    }
                    Action::Quit => break,
                }
            }
        }
    }

    if let Some(task) = loading {
        task.abort();
    }
    info!("quiz closed");
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Retry,
    Quit,
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_input(app: &mut App, key: KeyEvent) -> Action {
    if is_quit_key(&key) {
        return Action::Quit;
    }

    match app.state() {
        AppState::Loading => {}
        AppState::Unavailable => {
            if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                return Action::Retry;
            }
        }
        AppState::Welcome => handle_welcome_input(app, key.code),
        AppState::Quiz => handle_quiz_input(app, key.code),
        AppState::Result => handle_result_input(app, key.code),
    }
    Action::Continue
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer();
        }
        KeyCode::Char(c @ 'a'..='d') => {
            app.answer_with(c as usize - 'a' as usize);
        }
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    const PERIOD: Duration = Duration::from_millis(10);

    struct StaticSource(Vec<RawRecord>);

    #[async_trait]
    impl QuestionSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
            Ok(self.0.clone())
        }
    }

    /// Never answers.
    struct SilentSource;

    #[async_trait]
    impl QuestionSource for SilentSource {
        async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
            std::future::pending().await
        }
    }

    fn records(count: i64) -> Vec<RawRecord> {
        (1..=count)
            .map(|id| {
                RawRecord::new(
                    id,
                    format!("title {} lorem ipsum dolor sit", id),
                    "one two three four five six seven eight nine ten",
                )
            })
            .collect()
    }

    fn config(limit: usize, strict: bool) -> QuizConfig {
        QuizConfig::new(SourceLocation::default(), limit, strict, SessionConfig::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn correct_key(app: &App) -> KeyEvent {
        let question = app.current_question().unwrap();
        let index = question.options.iter().position(|o| o.is_correct).unwrap();
        press(KeyCode::Char((b'a' + index as u8) as char))
    }

    fn answer_correctly(app: &mut App) {
        for _ in 0..10 {
            app.tick();
        }
        let key = correct_key(app);
        handle_input(app, key);
    }

    #[tokio::test]
    async fn test_load_questions_limits_bank() {
        let source = StaticSource(records(100));
        let questions = load_questions(&source, &config(10, false)).await.unwrap();
        assert_eq!(questions.len(), 10);
    }

    #[tokio::test]
    async fn test_load_questions_strict_mode() {
        let source = StaticSource(records(3));

        let lenient = load_questions(&source, &config(10, false)).await.unwrap();
        assert_eq!(lenient.len(), 3);

        let strict = load_questions(&source, &config(10, true)).await;
        assert!(matches!(
            strict,
            Err(QuizError::Bank(BankError::InsufficientData { requested: 10, available: 3 }))
        ));
    }

    #[tokio::test]
    async fn test_load_questions_gives_up_on_silent_source() {
        let timeout = Duration::from_millis(50);
        let config = config(10, false).with_fetch_timeout(timeout).unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            load_questions(&SilentSource, &config),
        )
        .await
        .expect("load must not hang");

        assert!(matches!(
            result,
            Err(QuizError::Source(SourceError::TimedOut(t))) if t == timeout
        ));
    }

    #[tokio::test]
    async fn test_background_load_reports_unavailable() {
        let config = config(10, false)
            .with_fetch_timeout(Duration::from_millis(50))
            .unwrap();
        let mut quiz = Quiz::with_source(config, Arc::new(SilentSource));

        let mut loading = Some(quiz.spawn_load());
        assert_eq!(quiz.app().state(), AppState::Loading);
        // Quit keys are still honoured while the fetch is pending.
        assert_eq!(handle_input(quiz.app_mut(), press(KeyCode::Char('q'))), Action::Quit);

        let result = next_load(&mut loading).await;
        quiz.app_mut().finish_loading(result);
        assert_eq!(quiz.app().state(), AppState::Unavailable);
    }

    #[tokio::test]
    async fn test_ticker_follows_session_phase() {
        let questions = build_question_bank(&records(2), 10);
        let mut app = App::with_questions(questions, SessionConfig::default());
        let mut ticker = None;

        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_none(), "no clock before the session starts");

        app.start_quiz();
        sync_ticker(app.state(), &mut ticker, PERIOD);
        let first = ticker.as_ref().expect("clock runs during a question").abort_handle();

        // Moving between questions keeps the same clock.
        answer_correctly(&mut app);
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_some());
        assert!(!first.is_finished());

        // Completion by answering stops it.
        answer_correctly(&mut app);
        assert_eq!(app.state(), AppState::Result);
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_none());
        tokio::time::sleep(PERIOD * 3).await;
        assert!(first.is_finished());

        // Not recreated while the results are shown.
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_none());

        // Restart goes back to the welcome screen without a clock.
        app.restart();
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert_eq!(app.state(), AppState::Welcome);
        assert!(ticker.is_none());

        // Completion by timeout stops the second clock too.
        app.start_quiz();
        sync_ticker(app.state(), &mut ticker, PERIOD);
        let second = ticker.as_ref().unwrap().abort_handle();
        for _ in 0..60 {
            app.tick();
        }
        assert_eq!(app.state(), AppState::Result);
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_none());
        tokio::time::sleep(PERIOD * 3).await;
        assert!(second.is_finished());
    }

    #[tokio::test]
    async fn test_ticker_stops_when_session_is_restarted_mid_question() {
        let questions = build_question_bank(&records(2), 10);
        let mut app = App::with_questions(questions, SessionConfig::default());
        let mut ticker = None;

        app.start_quiz();
        sync_ticker(app.state(), &mut ticker, PERIOD);
        let handle = ticker.as_ref().unwrap().abort_handle();

        app.restart();
        sync_ticker(app.state(), &mut ticker, PERIOD);
        assert!(ticker.is_none());
        tokio::time::sleep(PERIOD * 3).await;
        assert!(handle.is_finished());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::with_questions(Vec::new(), SessionConfig::default());
        assert_eq!(handle_input(&mut app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_input(&mut app, press(KeyCode::Esc)), Action::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_input(&mut app, ctrl_c), Action::Quit);
        assert_eq!(handle_input(&mut app, press(KeyCode::Char('c'))), Action::Continue);
    }

    #[test]
    fn test_ctrl_c_quits_during_a_question() {
        let questions = build_question_bank(&records(1), 10);
        let mut app = App::with_questions(questions, SessionConfig::default());
        app.start_quiz();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_input(&mut app, ctrl_c), Action::Quit);
        assert!(app.session().unwrap().answers().is_empty());
    }

    #[test]
    fn test_retry_only_when_unavailable() {
        let mut app = App::new(SessionConfig::default());
        assert_eq!(handle_input(&mut app, press(KeyCode::Char('r'))), Action::Continue);

        app.finish_loading(Err(SessionError::EmptyBank.into()));
        assert_eq!(handle_input(&mut app, press(KeyCode::Char('r'))), Action::Retry);
    }

    #[test]
    fn test_keyboard_drives_full_session() {
        let questions = build_question_bank(&records(3), 10);
        let mut app = App::with_questions(questions, SessionConfig::default());

        handle_input(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state(), AppState::Quiz);

        // Locked: a direct answer key does nothing.
        let key = correct_key(&app);
        handle_input(&mut app, key);
        assert_eq!(app.current_question_number(), 1);

        for _ in 0..3 {
            answer_correctly(&mut app);
        }

        assert_eq!(app.state(), AppState::Result);
        let report = app.report();
        assert_eq!((report.total, report.correct), (3, 3));

        handle_input(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.state(), AppState::Welcome);
    }
}
