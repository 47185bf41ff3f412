use std::fmt;

/// Reasons a question can be rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// The question has nothing to pick from.
    NoChoices { prompt: String },
    /// The same choice is listed twice.
    DuplicateChoice { prompt: String, choice: String },
    /// The correct answer is not one of the listed choices.
    AnswerNotInChoices { prompt: String, answer: String },
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionError::NoChoices { prompt } => {
                write!(f, "question {:?} has no choices", prompt)
            }
            QuestionError::DuplicateChoice { prompt, choice } => {
                write!(f, "question {:?} lists {:?} more than once", prompt, choice)
            }
            QuestionError::AnswerNotInChoices { prompt, answer } => {
                write!(
                    f,
                    "question {:?} has answer {:?} which is not one of its choices",
                    prompt, answer
                )
            }
        }
    }
}

impl std::error::Error for QuestionError {}

/// A multiple-choice question with a hint for the second try.
///
/// Only [`Question::new`] builds one, so the answer is always among the
/// choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    answer: String,
    hint: String,
}

impl Question {
    pub fn new<P, C, S, A, H>(
        prompt: P,
        choices: C,
        answer: A,
        hint: H,
    ) -> Result<Self, QuestionError>
    where
        P: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
        A: Into<String>,
        H: Into<String>,
    {
        let prompt = prompt.into();
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let answer = answer.into();

        if choices.is_empty() {
            return Err(QuestionError::NoChoices { prompt });
        }

        for (index, choice) in choices.iter().enumerate() {
            if choices[..index].contains(choice) {
                return Err(QuestionError::DuplicateChoice {
                    prompt,
                    choice: choice.clone(),
                });
            }
        }

        if !choices.contains(&answer) {
            return Err(QuestionError::AnswerNotInChoices { prompt, answer });
        }

        Ok(Self {
            prompt,
            choices,
            answer,
            hint: hint.into(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Choice at a 0-based index.
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question() {
        let question =
            Question::new("What is 2 + 2?", ["3", "4", "5"], "4", "Count on your fingers").unwrap();
        assert_eq!(question.prompt(), "What is 2 + 2?");
        assert_eq!(question.choices(), ["3", "4", "5"]);
        assert_eq!(question.choice(1), Some("4"));
        assert_eq!(question.choice(3), None);
        assert!(question.is_correct("4"));
        assert!(!question.is_correct("5"));
    }

    #[test]
    fn test_answer_must_be_a_choice() {
        let err = Question::new(
            "What color is the sun?",
            ["Blue", "Pink", "Purple"],
            "Yellow",
            "Look up!",
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::AnswerNotInChoices {
                prompt: "What color is the sun?".to_string(),
                answer: "Yellow".to_string(),
            }
        );
        assert!(err.to_string().contains("\"Yellow\""));
    }

    #[test]
    fn test_rejects_empty_and_duplicate_choices() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Question::new("Q", empty, "A", "hint"),
            Err(QuestionError::NoChoices { .. })
        ));
        assert!(matches!(
            Question::new("Q", ["A", "B", "A"], "A", "hint"),
            Err(QuestionError::DuplicateChoice { choice, .. }) if choice == "A"
        ));
    }
}
