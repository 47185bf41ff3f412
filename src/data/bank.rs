use crate::models::Question;

/// prompt, choices, answer, hint
type Entry = (&'static str, [&'static str; 3], &'static str, &'static str);

const DEFAULT_BANK: [Entry; 5] = [
    (
        "What color is the sky on a sunny day?",
        ["Blue", "Green", "Purple"],
        "Blue",
        "Look up during the day!",
    ),
    (
        "Which animal says 'meow'?",
        ["Dog", "Cat", "Cow"],
        "Cat",
        "It purrs and likes to chase yarn!",
    ),
    (
        "What number comes after 4?",
        ["3", "5", "2"],
        "5",
        "Count: 1, 2, 3, 4, ...",
    ),
    (
        "Which fruit is yellow and curved?",
        ["Banana", "Apple", "Grape"],
        "Banana",
        "Monkeys love this fruit!",
    ),
    (
        "How many wheels does a bicycle have?",
        ["Two", "Three", "Four"],
        "Two",
        "Count the wheels when you ride!",
    ),
];

/// The built-in questions, always in the same order.
pub fn default_questions() -> Vec<Question> {
    DEFAULT_BANK
        .iter()
        .map(|(prompt, choices, answer, hint)| {
            Question::new(*prompt, *choices, *answer, *hint)
                .unwrap_or_else(|err| panic!("Built-in question is invalid: {}", err))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_contents() {
        let questions = default_questions();
        assert_eq!(questions.len(), 5);

        let prompts: Vec<&str> = questions.iter().map(Question::prompt).collect();
        assert_eq!(
            prompts,
            [
                "What color is the sky on a sunny day?",
                "Which animal says 'meow'?",
                "What number comes after 4?",
                "Which fruit is yellow and curved?",
                "How many wheels does a bicycle have?",
            ]
        );

        for question in &questions {
            assert_eq!(question.choices().len(), 3);
            assert!(question.choices().iter().any(|c| question.is_correct(c)));
            assert!(!question.hint().is_empty());
        }
    }

    #[test]
    fn test_default_bank_is_stable() {
        assert_eq!(default_questions(), default_questions());
    }
}
