mod bank;
mod options;
mod source;

pub use bank::{build_question_bank, build_question_bank_strict};
pub use options::{generate_options, generate_options_with};
pub use source::{HttpSource, JsonFileSource, QuestionSource, source_for};
