//! Final scoring derived from recorded answers.

use crate::models::AnswerRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub prompt: String,
    pub selected_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of recorded answers. Timed-out questions are not counted.
    pub total: usize,
    pub correct: usize,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn incorrect(&self) -> usize {
        self.total - self.correct
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

pub fn summarize(answers: &[AnswerRecord]) -> Report {
    let rows: Vec<ReportRow> = answers
        .iter()
        .map(|answer| ReportRow {
            prompt: answer.question_prompt.clone(),
            selected_text: answer.selected_text.clone(),
            is_correct: answer.is_correct,
        })
        .collect();

    Report {
        total: rows.len(),
        correct: rows.iter().filter(|row| row.is_correct).count(),
        rows,
    }
}
