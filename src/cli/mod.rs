//! CLI commands module for quizkeep.

pub mod app;
pub mod commands;

pub use app::{Cli, Commands, ConfigAction, DraftAction};
