use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::QuizError;
use crate::models::Question;

/// Tries allowed per question, counting unreadable answers.
pub const MAX_ATTEMPTS: usize = 2;

pub const POSITIVE_FEEDBACK: [&str; 4] = [
    "Great job!",
    "You are a star!",
    "Fantastic!",
    "Wow, super smart!",
];

pub const GENTLE_RETRY: [&str; 3] = [
    "Nice try, let's think again!",
    "Almost! Listen to the hint.",
    "No worries, you can do it!",
];

const INVALID_CHOICE: &str = "Let's try again. Remember to pick a number from the list!";

/// Turn a typed answer like `"2"` into a 0-based choice index.
///
/// Only plain digits naming one of the listed choices count.
pub fn parse_choice(input: &str, choice_count: usize) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number: usize = trimmed.parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < choice_count).then_some(index)
}

/// Ask one question, giving a hint after a miss.
///
/// Returns `Ok(true)` as soon as the right choice is picked and `Ok(false)`
/// once [`MAX_ATTEMPTS`] tries are used up. Unreadable answers use up a try.
pub fn ask_question<I, O, R>(
    question: &Question,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<bool, QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    writeln!(output, "{}", question.prompt())?;
    for (index, choice) in question.choices().iter().enumerate() {
        writeln!(output, "  {}. {}", index + 1, choice)?;
    }

    let choice_count = question.choices().len();
    let mut buf = Vec::new();

    for attempt in 1..=MAX_ATTEMPTS {
        write!(output, "Choose the best answer (1-{}): ", choice_count)?;
        output.flush()?;

        // Bytes that aren't UTF-8 are just another unreadable answer.
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed on attempt {}", attempt);
        }
        let line = String::from_utf8_lossy(&buf);

        let picked = parse_choice(&line, choice_count).and_then(|index| question.choice(index));
        let Some(picked) = picked else {
            debug!("attempt {}: unreadable answer {:?}", attempt, line.trim());
            writeln!(output, "{}", INVALID_CHOICE)?;
            continue;
        };

        if question.is_correct(picked) {
            debug!("attempt {}: picked {:?}, correct", attempt, picked);
            writeln!(output, "{}", pick(&POSITIVE_FEEDBACK, rng))?;
            return Ok(true);
        }

        debug!("attempt {}: picked {:?}, wrong", attempt, picked);
        writeln!(output, "{}", pick(&GENTLE_RETRY, rng))?;
        writeln!(output, "Hint: {}", question.hint())?;
    }

    writeln!(output, "The answer was: {}. Great effort!", question.answer())?;
    Ok(false)
}

fn pick<'a, R>(messages: &[&'a str], rng: &mut R) -> &'a str
where
    R: Rng + ?Sized,
{
    messages.choose(rng).copied().unwrap_or_default()
}
