//! Subcommand handlers. Each one is a single quiz action that loads the
//! store, applies the action and writes the result back before returning.

pub mod author;
pub mod config;
pub mod quiz;

use std::time::Duration;

use tracing::debug;

use crate::cli::app::{Commands, ConfigAction};
use crate::config::Config;
use crate::quiz::{AuthoringPolicy, QuizController};
use crate::state::FileStore;

pub fn run(command: Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Show { json } => quiz::handle_show(config, json),
        Commands::Select { option, number } => quiz::handle_select(config, option, number),
        Commands::Next => quiz::handle_next(config),
        Commands::Restart => quiz::handle_restart(config),
        Commands::Questions { json } => author::handle_questions(config, json),
        Commands::Delete { number } => author::handle_delete(config, number),
        Commands::Draft { action } => author::handle_draft(config, action),
        Commands::Config { action } => match action {
            ConfigAction::Init { force, path } => config::handle_init(force, path),
            ConfigAction::Show { json } => config::handle_show(config, json),
            ConfigAction::Validate => config::handle_validate(config),
        },
    }
}

/// Open the configured file store and load the quiz from it.
pub fn open_controller(config: &Config) -> anyhow::Result<QuizController<FileStore>> {
    let path = config.store_path();
    debug!(path = %path.display(), "Opening question store");
    let store = FileStore::open_with_timeout(
        path,
        Duration::from_millis(config.storage.lock_timeout_ms),
    )?;
    let controller = QuizController::open(store, AuthoringPolicy::from(&config.authoring))?;
    Ok(controller)
}
