use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No option selected")]
    NoSelection,

    #[error("Quiz is finished; restart to play again")]
    Finished,

    #[error("No current question")]
    NoCurrentQuestion,

    #[error("Question index {index} out of range ({len} questions)")]
    QuestionIndex { index: usize, len: usize },

    #[error("Option slot {slot} out of range (4 slots)")]
    OptionSlot { slot: usize },

    #[error("Correct answer {answer:?} is not one of the options")]
    AnswerNotInOptions { answer: String },
}

