use anyhow::Context;

use crate::cli::app::DraftAction;
use crate::config::Config;
use crate::quiz::{DraftQuestion, QuizState};

use super::open_controller;

pub fn handle_questions(config: &Config, json: bool) -> anyhow::Result<()> {
    let controller = open_controller(config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&controller.quiz().questions)?);
    } else {
        print!("{}", render_questions(controller.quiz()));
    }
    Ok(())
}

pub fn handle_delete(config: &Config, number: usize) -> anyhow::Result<()> {
    let index = number.checked_sub(1).context("Question numbers start at 1")?;
    let mut controller = open_controller(config)?;
    let removed = controller.delete_question(index)?;
    println!("Deleted question {number}: {}", removed.text);
    Ok(())
}

pub fn handle_draft(config: &Config, action: DraftAction) -> anyhow::Result<()> {
    let mut controller = open_controller(config)?;
    match action {
        DraftAction::Show => {}
        DraftAction::Text { text } => controller.update_draft_text(text)?,
        DraftAction::Choice { slot, text } => {
            controller.update_draft_option(usize::from(slot) - 1, text)?
        }
        DraftAction::Answer { text } => controller.update_draft_answer(text)?,
        DraftAction::Submit => {
            let added = controller.submit_draft()?.text.clone();
            println!(
                "Added question {}: {added}",
                controller.quiz().questions.len()
            );
            return Ok(());
        }
        DraftAction::Clear => controller.clear_draft()?,
    }
    print!("{}", render_draft(controller.draft()));
    Ok(())
}

pub fn render_questions(quiz: &QuizState) -> String {
    if quiz.questions.is_empty() {
        return "No questions\n".to_string();
    }
    quiz.questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let marker = if index == quiz.current_index && !quiz.is_finished {
                '>'
            } else {
                ' '
            };
            format!(
                "{marker} {}. {} ({} options)\n",
                index + 1,
                question.text,
                question.options.len()
            )
        })
        .collect()
}

pub fn render_draft(draft: &DraftQuestion) -> String {
    let mut out = format!("Question: {}\n", draft.text);
    for (slot, option) in draft.options.iter().enumerate() {
        out.push_str(&format!("Option {}: {option}\n", slot + 1));
    }
    out.push_str(&format!("Correct answer: {}\n", draft.correct_answer));
    out
}
