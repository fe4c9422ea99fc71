//! Typed layout of the persisted quiz snapshot.
//!
//! Every field lives under its own key. Lists are JSON, scalars plain text.

use serde::de::DeserializeOwned;

use crate::quiz::{DraftQuestion, OPTION_SLOTS, Question, QuizState};

use super::error::StateError;
use super::kv::KeyValueStore;

pub const KEY_QUESTIONS: &str = "customQuestions";
pub const KEY_CURRENT_INDEX: &str = "currentQuestionIndex";
pub const KEY_SELECTED_OPTION: &str = "selectedOption";
pub const KEY_SCORE: &str = "score";
pub const KEY_SHOW_RESULTS: &str = "showResults";
pub const KEY_DRAFT_TEXT: &str = "customQuestion";
pub const KEY_DRAFT_OPTIONS: &str = "customOptions";
pub const KEY_DRAFT_ANSWER: &str = "customAnswer";

pub const ALL_KEYS: [&str; 8] = [
    KEY_QUESTIONS,
    KEY_CURRENT_INDEX,
    KEY_SELECTED_OPTION,
    KEY_SCORE,
    KEY_SHOW_RESULTS,
    KEY_DRAFT_TEXT,
    KEY_DRAFT_OPTIONS,
    KEY_DRAFT_ANSWER,
];

/// Quiz progress together with the authoring draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub quiz: QuizState,
    pub draft: DraftQuestion,
}

impl Snapshot {
    pub fn encode(&self) -> Result<Vec<(&'static str, String)>, StateError> {
        Ok(vec![
            (KEY_QUESTIONS, serde_json::to_string(&self.quiz.questions)?),
            (KEY_CURRENT_INDEX, self.quiz.current_index.to_string()),
            (KEY_SELECTED_OPTION, self.quiz.selected_option.clone()),
            (KEY_SCORE, self.quiz.score.to_string()),
            (KEY_SHOW_RESULTS, self.quiz.is_finished.to_string()),
            (KEY_DRAFT_TEXT, self.draft.text.clone()),
            (KEY_DRAFT_OPTIONS, serde_json::to_string(&self.draft.options)?),
            (KEY_DRAFT_ANSWER, self.draft.correct_answer.clone()),
        ])
    }

    /// Read a snapshot back.
    ///
    /// Returns `Ok(None)` when no non-empty question list is stored. Absent
    /// keys take their defaults; present values that fail to decode are errors.
    pub fn decode<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>, StateError> {
        let questions: Vec<Question> = decode_json::<Option<Vec<Question>>, _>(store, KEY_QUESTIONS)?
            .flatten()
            .unwrap_or_default();
        if questions.is_empty() {
            return Ok(None);
        }

        let score = decode_count(store, KEY_SCORE)?.unwrap_or_default();
        if score > questions.len() {
            return Err(StateError::malformed(
                KEY_SCORE,
                format!("score {score} exceeds {} questions", questions.len()),
            ));
        }

        let quiz = QuizState {
            questions,
            current_index: decode_count(store, KEY_CURRENT_INDEX)?.unwrap_or_default(),
            selected_option: store.get(KEY_SELECTED_OPTION).unwrap_or_default(),
            score,
            is_finished: decode_flag(store, KEY_SHOW_RESULTS)?.unwrap_or_default(),
        };

        let draft = DraftQuestion {
            text: store.get(KEY_DRAFT_TEXT).unwrap_or_default(),
            options: decode_json::<Option<[String; OPTION_SLOTS]>, _>(store, KEY_DRAFT_OPTIONS)?
                .flatten()
                .unwrap_or_default(),
            correct_answer: store.get(KEY_DRAFT_ANSWER).unwrap_or_default(),
        };

        Ok(Some(Self { quiz, draft }))
    }
}

fn decode_json<T, S>(store: &S, key: &'static str) -> Result<Option<T>, StateError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw).map_err(|err| StateError::malformed(key, err)))
        .transpose()
}

fn decode_count<S>(store: &S, key: &'static str) -> Result<Option<usize>, StateError>
where
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|err| StateError::malformed(key, format!("{raw:?}: {err}")))
        })
        .transpose()
}

fn decode_flag<S>(store: &S, key: &'static str) -> Result<Option<bool>, StateError>
where
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)
        .map(|raw| match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(StateError::malformed(
                key,
                format!("expected \"true\" or \"false\", got {other:?}"),
            )),
        })
        .transpose()
}
