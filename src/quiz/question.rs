use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Field names follow the persisted layout:
/// ```json
/// {"question": "...", "options": ["..."], "correctAnswer": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Whether the correct answer is one of the listed options.
    pub fn is_winnable(&self) -> bool {
        self.options.iter().any(|option| *option == self.correct_answer)
    }
}

/// The built-in question set used when the store holds no questions.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            "Paris",
        ),
        Question::new(
            "Who wrote \"To Kill a Mockingbird\"?",
            ["Harper Lee", "J.K. Rowling", "Stephen King", "Jane Austen"],
            "Harper Lee",
        ),
    ]
}
