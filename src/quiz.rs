//! Picking the questions for one run.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::default_questions;
use crate::models::Question;

/// Knobs for a single session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizOptions {
    /// Ask at most this many questions. `None` asks the whole bank.
    pub limit: Option<usize>,
}

/// Shuffle a copy of `bank` (or the built-in questions when `None`).
///
/// The caller's slice is never reordered, so the same bank can be reused
/// across runs.
pub fn build_quiz<R>(bank: Option<&[Question]>, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut questions = match bank {
        Some(bank) => bank.to_vec(),
        None => default_questions(),
    };
    questions.shuffle(rng);
    questions
}

/// Shuffle and then keep only as many questions as `options` allows.
pub fn assemble<R>(
    bank: Option<&[Question]>,
    options: QuizOptions,
    rng: &mut R,
) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let mut questions = build_quiz(bank, rng);
    if let Some(limit) = options.limit {
        questions.truncate(limit);
    }
    questions
}
