use serde::Serialize;
use tracing::debug;

use super::error::QuizError;
use super::question::{Question, default_questions};

/// Explicit view of where the quiz is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    InProgress { index: usize, score: usize },
    Finished { score: usize },
}

/// Result of a successful [`QuizState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    pub correct: bool,
    pub phase: Phase,
}

/// Quiz progress over an ordered question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub current_index: usize,
    /// Empty when nothing has been chosen for the current question.
    pub selected_option: String,
    pub score: usize,
    pub is_finished: bool,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(default_questions())
    }
}

impl QuizState {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_option: String::new(),
            score: 0,
            is_finished: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished {
            Phase::Finished { score: self.score }
        } else {
            Phase::InProgress {
                index: self.current_index,
                score: self.score,
            }
        }
    }

    /// The question at `current_index`, if the index still points into the list.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_option.is_empty()
    }

    /// Record the chosen option. Any string is accepted.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), QuizError> {
        if self.is_finished {
            return Err(QuizError::Finished);
        }
        self.selected_option = option.into();
        debug!(index = self.current_index, selected = %self.selected_option, "Option selected");
        Ok(())
    }

    /// Score the current selection and move to the next question or to the results.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if self.is_finished {
            return Err(QuizError::Finished);
        }
        if !self.has_selection() {
            return Err(QuizError::NoSelection);
        }
        let correct = self
            .current_question()
            .ok_or(QuizError::NoCurrentQuestion)?
            .is_correct(&self.selected_option);

        if correct {
            self.score = self.score.saturating_add(1).min(self.questions.len());
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_option.clear();
        } else {
            self.is_finished = true;
        }

        let phase = self.phase();
        debug!(correct, ?phase, "Quiz advanced");
        Ok(Advance { correct, phase })
    }

    /// Back to the first question with a zero score. Questions are kept.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected_option.clear();
        self.score = 0;
        self.is_finished = false;
        debug!("Quiz restarted");
    }

    pub fn push_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Remove a question. `current_index` is left as is; `score` is capped
    /// at the new question count.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::QuestionIndex {
                index,
                len: self.questions.len(),
            });
        }
        let removed = self.questions.remove(index);
        self.score = self.score.min(self.questions.len());
        Ok(removed)
    }
}
