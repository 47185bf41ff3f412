//! # little-quiz
//!
//! A friendly multiple-choice quiz for young children, played on the
//! console.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use little_quiz::{QuizError, QuizOptions};
//! use rand::thread_rng;
//!
//! fn main() -> Result<(), QuizError> {
//!     let stdin = std::io::stdin();
//!     let mut input = stdin.lock();
//!     let mut output = std::io::stdout();
//!
//!     // `None` plays the built-in questions
//!     little_quiz::run_quiz(
//!         None,
//!         QuizOptions::default(),
//!         &mut input,
//!         &mut output,
//!         &mut thread_rng(),
//!     )
//! }
//! ```

mod app;
mod data;
mod models;
mod quiz;
pub mod ui;

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::Rng;

pub use app::{App, Summary};
pub use data::default_questions;
pub use models::{Question, QuestionError, ScoreTier};
pub use quiz::{QuizOptions, assemble, build_quiz};
pub use ui::ask_question;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// IO error while talking to the player.
    Io(io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// Play a whole quiz: shuffle `bank` (built-in questions when `None`), ask
/// each question and print the final score.
pub fn run_quiz<I, O, R>(
    bank: Option<&[Question]>,
    options: QuizOptions,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<(), QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    let questions = assemble(bank, options, rng);
    App::new(questions).run(input, output, rng)?;
    Ok(())
}
