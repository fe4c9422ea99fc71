use anyhow::{Context, bail};
use serde::Serialize;

use crate::config::Config;
use crate::quiz::{Phase, Question, QuizState};

use super::open_controller;

pub fn handle_show(config: &Config, json: bool) -> anyhow::Result<()> {
    let controller = open_controller(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&quiz_view(controller.quiz()))?);
    } else {
        print!("{}", render_quiz(controller.quiz()));
    }
    Ok(())
}

pub fn handle_select(
    config: &Config,
    option: Option<String>,
    number: Option<usize>,
) -> anyhow::Result<()> {
    let mut controller = open_controller(config)?;
    let option = match (option, number) {
        (Some(option), _) => option,
        (None, Some(number)) => {
            let question = controller
                .quiz()
                .current_question()
                .context("No current question")?;
            number
                .checked_sub(1)
                .and_then(|index| question.options.get(index))
                .cloned()
                .with_context(|| {
                    format!(
                        "Option {number} does not exist (1-{})",
                        question.options.len()
                    )
                })?
        }
        (None, None) => bail!("Specify an option or --number"),
    };

    controller.select_option(option.clone())?;
    println!("Selected: {option}");
    Ok(())
}

pub fn handle_next(config: &Config) -> anyhow::Result<()> {
    let mut controller = open_controller(config)?;
    controller.advance()?;
    print!("{}", render_quiz(controller.quiz()));
    Ok(())
}

pub fn handle_restart(config: &Config) -> anyhow::Result<()> {
    let mut controller = open_controller(config)?;
    controller.restart()?;
    print!("{}", render_quiz(controller.quiz()));
    Ok(())
}

/// Plain-text view of the quiz: the current question, or the results.
pub fn render_quiz(quiz: &QuizState) -> String {
    let total = quiz.questions.len();
    let lines = match quiz.phase() {
        Phase::Finished { score } => vec!["Results".to_string(), format!("Score: {score}/{total}")],
        Phase::InProgress { index, .. } => match quiz.current_question() {
            Some(question) => {
                let mut lines = vec![
                    format!("Question {} of {total}", index + 1),
                    question.text.clone(),
                ];
                lines.extend(question.options.iter().enumerate().map(|(number, option)| {
                    let marker = if *option == quiz.selected_option { '>' } else { ' ' };
                    format!("{marker} {}) {option}", number + 1)
                }));
                lines
            }
            None => vec!["No question to show".to_string()],
        },
    };

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// JSON view for `show --json`. Never carries the correct answer.
#[derive(Debug, Serialize)]
struct QuizView<'a> {
    state: Phase,
    total: usize,
    selected_option: &'a str,
    question: Option<QuestionView<'a>>,
}

#[derive(Debug, Serialize)]
struct QuestionView<'a> {
    question: &'a str,
    options: &'a [String],
}

impl<'a> From<&'a Question> for QuestionView<'a> {
    fn from(question: &'a Question) -> Self {
        Self {
            question: &question.text,
            options: &question.options,
        }
    }
}

fn quiz_view(quiz: &QuizState) -> QuizView<'_> {
    QuizView {
        state: quiz.phase(),
        total: quiz.questions.len(),
        selected_option: &quiz.selected_option,
        question: quiz
            .current_question()
            .filter(|_| !quiz.is_finished)
            .map(QuestionView::from),
    }
}
