use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::QuizError;
use crate::models::{Question, ScoreTier};
use crate::ui;

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub tier: ScoreTier,
}

/// One run through an already-ordered list of questions.
pub struct App {
    questions: Vec<Question>,
    score: usize,
}

impl App {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            score: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score, self.total())
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.score += 1;
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            total: self.total(),
            tier: self.tier(),
        }
    }

    /// Greet, ask every question in order, then print the score.
    pub fn run<I, O, R>(
        mut self,
        input: &mut I,
        output: &mut O,
        rng: &mut R,
    ) -> Result<Summary, QuizError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
        R: Rng + ?Sized,
    {
        info!("starting quiz with {} questions", self.total());
        ui::welcome::render(output)?;

        let mut score = 0;
        for (number, question) in self.questions.iter().enumerate() {
            let correct = ui::ask_question(question, input, output, rng)?;
            debug!("question {} {:?}: correct = {}", number + 1, question.prompt(), correct);
            score += usize::from(correct);
            writeln!(output)?;
        }
        self.score = score;

        ui::result::render(output, self.score, self.total())?;
        output.flush()?;

        let summary = self.summary();
        info!(
            "quiz finished: {} out of {} ({:?})",
            summary.score, summary.total, summary.tier
        );
        Ok(summary)
    }
}
