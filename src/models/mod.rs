mod question;
mod record;

pub use question::{AnswerOption, AnswerRecord, OPTIONS_PER_QUESTION, Question};
pub use record::RawRecord;
