//! Prompt construction for ice-breaker generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::bank::QUESTION_BANK;

/// Number of questions the model is asked for.
pub const QUESTION_COUNT: usize = 15;

/// Copy of the question bank in uniformly random order (Fisher–Yates).
#[must_use]
pub fn shuffled_bank<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let mut questions = QUESTION_BANK.to_vec();
    questions.shuffle(rng);
    questions
}

/// Build the user prompt.
///
/// The model takes five questions verbatim from `examples`, writes five similar
/// new ones, then five tied to `location` and `date`.
#[must_use]
pub fn build_prompt(examples: &[&str], location: &str, date: &str) -> String {
    format!(
        "Make {QUESTION_COUNT} ice-breaker questions like these:\n{}\n\
         The first 5 questions should be taken from the examples. \
         The next 5 questions should be similar to but not taken from the examples. \
         The last 5 questions should be related to the user's location and the current date.\n\
         Location: {location}\nDate: {date}",
        examples.join("\n")
    )
}
