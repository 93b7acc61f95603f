use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use timed_quiz::config::{
    DEFAULT_ANSWER_LOCK_SECONDS, DEFAULT_FETCH_TIMEOUT, DEFAULT_QUESTION_DURATION_SECONDS,
    DEFAULT_QUESTION_LIMIT, DEFAULT_SOURCE_URL,
};
use timed_quiz::{Quiz, QuizConfig, QuizError, SessionConfig, SourceLocation, logging};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL returning a JSON array of question records
    #[arg(short, long, env = "QUIZ_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// Read question records from a local JSON file instead of the URL
    #[arg(short, long, env = "QUIZ_SOURCE_FILE", conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Number of questions in a session
    #[arg(short, long, env = "QUIZ_LIMIT", default_value_t = DEFAULT_QUESTION_LIMIT)]
    limit: usize,

    /// Refuse to start with fewer questions than the limit
    #[arg(long, env = "QUIZ_STRICT")]
    strict: bool,

    /// Seconds allowed per question
    #[arg(short, long, env = "QUIZ_DURATION", default_value_t = DEFAULT_QUESTION_DURATION_SECONDS)]
    duration: u32,

    /// Seconds answers stay locked at the start of each question
    #[arg(long, env = "QUIZ_LOCK", default_value_t = DEFAULT_ANSWER_LOCK_SECONDS)]
    lock: u32,

    /// Seconds to wait for the question source before giving up
    #[arg(long, env = "QUIZ_FETCH_TIMEOUT", default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    timeout: u64,

    /// Append logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<QuizConfig, QuizError> {
        let source = match self.file {
            Some(path) => SourceLocation::File(path),
            None => SourceLocation::Url(self.url),
        };
        let session = SessionConfig::new(self.duration, self.lock)?;
        let config = QuizConfig::new(source, self.limit, self.strict, session)?
            .with_fetch_timeout(Duration::from_secs(self.timeout))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_file.as_deref()) {
        eprintln!("Failed to open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(?config, "starting quiz");

    let quiz = match Quiz::new(config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to set up question source: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match quiz.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "quiz failed");
            eprintln!("Error running quiz: {}", e);
            ExitCode::FAILURE
        }
    }
}
