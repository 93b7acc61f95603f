use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::BankError;
use crate::models::{Question, RawRecord};

use super::options::generate_options;

/// Build up to `limit` questions from the leading records, in source order.
///
/// Returns fewer questions when fewer records are available; whether that is
/// acceptable is left to the caller (see [`build_question_bank_strict`]).
pub fn build_question_bank(records: &[RawRecord], limit: usize) -> Vec<Question> {
    if records.len() < limit {
        debug!(requested = limit, available = records.len(), "building a short question bank");
    }

    let mut seen = HashSet::new();
    records
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, record)| {
            if !seen.insert(record.id) {
                warn!(id = record.id, "duplicate record id in question source");
            }
            Question {
                id: record.id,
                prompt: format!("Question {}: {}", index + 1, record.primary_text),
                options: generate_options(record),
            }
        })
        .collect()
}

/// Like [`build_question_bank`] but requires exactly `limit` questions.
pub fn build_question_bank_strict(
    records: &[RawRecord],
    limit: usize,
) -> Result<Vec<Question>, BankError> {
    if records.len() < limit {
        return Err(BankError::InsufficientData {
            requested: limit,
            available: records.len(),
        });
    }

    Ok(build_question_bank(records, limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<RawRecord> {
        (1..=count as i64)
            .map(|id| {
                RawRecord::new(
                    id,
                    format!("title {} with several extra words", id),
                    format!("body {} one two three four five six seven eight nine", id),
                )
            })
            .collect()
    }

    #[test]
    fn test_takes_first_records_in_order() {
        let bank = build_question_bank(&records(100), 10);

        assert_eq!(bank.len(), 10);
        let ids: Vec<i64> = bank.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_prompt_is_numbered_from_one() {
        let bank = build_question_bank(&records(3), 10);

        assert_eq!(bank[0].prompt, "Question 1: title 1 with several extra words");
        assert_eq!(bank[2].prompt, "Question 3: title 3 with several extra words");
    }

    #[test]
    fn test_every_question_has_four_options_one_correct() {
        let bank = build_question_bank(&records(10), 10);

        for question in &bank {
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
            let correct = question.correct_option().unwrap();
            assert!(question.prompt.ends_with(&correct.text));
        }
    }

    #[test]
    fn test_short_source_builds_fewer_questions() {
        assert_eq!(build_question_bank(&records(4), 10).len(), 4);
        assert!(build_question_bank(&[], 10).is_empty());
    }

    #[test]
    fn test_strict_mode_rejects_short_source() {
        let result = build_question_bank_strict(&records(4), 10);
        assert_eq!(
            result,
            Err(BankError::InsufficientData {
                requested: 10,
                available: 4
            })
        );

        assert_eq!(build_question_bank_strict(&records(12), 10).unwrap().len(), 10);
    }
}
