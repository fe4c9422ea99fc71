use thiserror::Error;
use tracing::{info, warn};

use crate::state::{KeyValueStore, PersistenceBridge, Snapshot, StateError};

use super::draft::DraftQuestion;
use super::error::QuizError;
use super::question::Question;
use super::state::{Advance, QuizState};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Rules applied when a draft is submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthoringPolicy {
    /// Reject drafts whose answer is not among the kept options.
    pub require_answer_in_options: bool,
}

/// Owns the quiz and the draft and writes both through to the store after
/// every successful action. A rejected action changes nothing and writes nothing.
pub struct QuizController<S: KeyValueStore> {
    snapshot: Snapshot,
    bridge: PersistenceBridge<S>,
    policy: AuthoringPolicy,
}

impl<S: KeyValueStore> QuizController<S> {
    /// Load the stored snapshot (or the defaults) and persist it once.
    pub fn open(store: S, policy: AuthoringPolicy) -> Result<Self, ControllerError> {
        let bridge = PersistenceBridge::new(store);
        let snapshot = bridge.load()?;
        let mut controller = Self {
            snapshot,
            bridge,
            policy,
        };
        controller.persist()?;
        Ok(controller)
    }

    pub fn quiz(&self) -> &QuizState {
        &self.snapshot.quiz
    }

    pub fn draft(&self) -> &DraftQuestion {
        &self.snapshot.draft
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn store(&self) -> &S {
        self.bridge.store()
    }

    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), ControllerError> {
        self.snapshot.quiz.select_option(option)?;
        self.persist()
    }

    pub fn advance(&mut self) -> Result<Advance, ControllerError> {
        let outcome = self.snapshot.quiz.advance()?;
        self.persist()?;
        Ok(outcome)
    }

    pub fn restart(&mut self) -> Result<(), ControllerError> {
        self.snapshot.quiz.restart();
        self.persist()
    }

    pub fn update_draft_text(&mut self, text: impl Into<String>) -> Result<(), ControllerError> {
        self.snapshot.draft.set_text(text);
        self.persist()
    }

    pub fn update_draft_option(
        &mut self,
        slot: usize,
        text: impl Into<String>,
    ) -> Result<(), ControllerError> {
        self.snapshot.draft.set_option(slot, text)?;
        self.persist()
    }

    pub fn update_draft_answer(&mut self, answer: impl Into<String>) -> Result<(), ControllerError> {
        self.snapshot.draft.set_answer(answer);
        self.persist()
    }

    pub fn clear_draft(&mut self) -> Result<(), ControllerError> {
        self.snapshot.draft.clear();
        self.persist()
    }

    /// Append the draft as a new question and reset the draft.
    pub fn submit_draft(&mut self) -> Result<&Question, ControllerError> {
        let candidate = self.snapshot.draft.to_question();
        if !candidate.is_winnable() {
            if self.policy.require_answer_in_options {
                return Err(QuizError::AnswerNotInOptions {
                    answer: candidate.correct_answer,
                }
                .into());
            }
            warn!(
                answer = %candidate.correct_answer,
                "Correct answer is not among the options; question cannot be answered correctly"
            );
        }

        let question = self.snapshot.draft.take_question();
        self.snapshot.quiz.push_question(question);
        self.persist()?;
        info!(total = self.snapshot.quiz.questions.len(), "Question added");

        let questions = &self.snapshot.quiz.questions;
        Ok(&questions[questions.len() - 1])
    }

    /// Remove a question. The current position is not moved.
    pub fn delete_question(&mut self, index: usize) -> Result<Question, ControllerError> {
        let removed = self.snapshot.quiz.remove_question(index)?;
        self.persist()?;

        let quiz = &self.snapshot.quiz;
        info!(index, remaining = quiz.questions.len(), "Question deleted");
        if index <= quiz.current_index {
            warn!(
                index,
                current_index = quiz.current_index,
                remaining = quiz.questions.len(),
                "Deleted a question at or before the current position; current question shifted"
            );
        }
        Ok(removed)
    }

    pub fn into_store(self) -> S {
        self.bridge.into_store()
    }

    fn persist(&mut self) -> Result<(), ControllerError> {
        self.bridge.save(&self.snapshot)?;
        Ok(())
    }
}
