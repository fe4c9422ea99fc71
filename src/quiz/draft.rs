use super::error::QuizError;
use super::question::Question;

/// Number of option inputs offered while authoring.
pub const OPTION_SLOTS: usize = 4;

/// Author-side scratch fields for a question not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftQuestion {
    pub text: String,
    pub options: [String; OPTION_SLOTS],
    pub correct_answer: String,
}

impl DraftQuestion {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_option(&mut self, slot: usize, text: impl Into<String>) -> Result<(), QuizError> {
        let option = self
            .options
            .get_mut(slot)
            .ok_or(QuizError::OptionSlot { slot })?;
        *option = text.into();
        Ok(())
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.correct_answer = answer.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The question this draft would produce. Blank options are dropped.
    pub fn to_question(&self) -> Question {
        Question {
            text: self.text.clone(),
            options: self
                .options
                .iter()
                .filter(|option| !option.trim().is_empty())
                .cloned()
                .collect(),
            correct_answer: self.correct_answer.clone(),
        }
    }

    /// Build the question and reset every field.
    pub fn take_question(&mut self) -> Question {
        let question = self.to_question();
        self.clear();
        question
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters() {
        let mut draft = DraftQuestion::default();
        draft.set_text("Largest planet?");
        draft.set_option(0, "Jupiter").unwrap();
        draft.set_option(3, "Mars").unwrap();
        draft.set_answer("Jupiter");

        assert_eq!(draft.text, "Largest planet?");
        assert_eq!(draft.options, ["Jupiter", "", "", "Mars"].map(String::from));
        assert_eq!(draft.correct_answer, "Jupiter");
    }

    #[test]
    fn test_option_slot_out_of_range() {
        let mut draft = DraftQuestion::default();
        assert_eq!(
            draft.set_option(OPTION_SLOTS, "x"),
            Err(QuizError::OptionSlot { slot: OPTION_SLOTS })
        );
        assert!(draft.is_empty());
    }

    #[test]
    fn test_take_question_filters_blank_options_and_clears() {
        let mut draft = DraftQuestion::default();
        draft.set_text("Pick");
        draft.set_option(0, "a").unwrap();
        draft.set_option(1, "   ").unwrap();
        draft.set_option(2, "c").unwrap();
        draft.set_answer("c");

        let question = draft.take_question();

        assert_eq!(question.options, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(question.correct_answer, "c");
        assert!(draft.is_empty());
    }

    #[test]
    fn test_take_question_accepts_empty_draft() {
        let mut draft = DraftQuestion::default();
        let question = draft.take_question();
        assert!(question.text.is_empty());
        assert!(question.options.is_empty());
    }
}
