use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{AnswerOption, OPTIONS_PER_QUESTION, RawRecord};

/// Derive the four answer options for a record in a uniformly random order.
///
/// The primary text is the correct answer. The decoys are the first five
/// words of the secondary text, words 2-6 of the primary text, and words
/// 6-10 of the secondary text.
pub fn generate_options(record: &RawRecord) -> [AnswerOption; OPTIONS_PER_QUESTION] {
    generate_options_with(record, &mut rand::rng())
}

/// Same as [`generate_options`] with a caller-supplied random source.
pub fn generate_options_with<R: Rng + ?Sized>(
    record: &RawRecord,
    rng: &mut R,
) -> [AnswerOption; OPTIONS_PER_QUESTION] {
    let mut options = candidate_options(record);
    options.shuffle(rng);
    options
}

/// The unshuffled candidates. The correct flag belongs to the candidate built
/// from the primary text, so a decoy that happens to equal it stays incorrect.
fn candidate_options(record: &RawRecord) -> [AnswerOption; OPTIONS_PER_QUESTION] {
    let primary = record.primary_text.as_str();
    let secondary = record.secondary_text.as_str();

    [
        AnswerOption::new(primary, true),
        AnswerOption::new(word_slice(secondary, 0, 5), false),
        AnswerOption::new(word_slice(primary, 1, 6), false),
        AnswerOption::new(word_slice(secondary, 5, 10), false),
    ]
}

/// Words `start..end` of `text` split on single spaces, clamped to the
/// words available.
fn word_slice(text: &str, start: usize, end: usize) -> String {
    text.split(' ')
        .skip(start)
        .take(end - start)
        .collect::<Vec<_>>()
        .join(" ")
}
