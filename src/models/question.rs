/// Every question is presented with exactly this many choices.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One answer choice. Correctness travels with the option and must never be
/// re-derived from `text`, since two options may render identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub prompt: String,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    /// The option flagged as correct, if the bank was built consistently.
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// The user's choice for one question, captured at the moment of answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: i64,
    pub question_prompt: String,
    pub selected_text: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &Question, selected: &AnswerOption) -> Self {
        Self {
            question_id: question.id,
            question_prompt: question.prompt.clone(),
            selected_text: selected.text.clone(),
            is_correct: selected.is_correct,
        }
    }
}
