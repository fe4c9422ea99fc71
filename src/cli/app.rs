use std::path::PathBuf;

use clap::Parser;

/// Multiple-choice quiz that remembers where you left off
#[derive(Parser, Debug)]
#[command(name = "quizkeep", author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Show the current question or the results
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select an answer for the current question
    Select {
        /// Option text
        #[arg(required_unless_present = "number")]
        option: Option<String>,
        /// Option number as listed by `show`
        #[arg(short, long, conflicts_with = "option")]
        number: Option<usize>,
    },
    /// Score the selection and move on
    Next,
    /// Start the quiz over, keeping the questions
    Restart,
    /// List all questions
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a question by its number
    Delete {
        /// Question number as listed by `questions`
        number: usize,
    },
    /// Author a new question
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum DraftAction {
    /// Show the draft
    Show,
    /// Set the question text
    Text { text: String },
    /// Set one of the four option slots
    #[command(name = "option")]
    Choice {
        /// Slot number (1-4)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        slot: u8,
        text: String,
    },
    /// Set the correct answer
    Answer { text: String },
    /// Add the draft to the question list
    Submit,
    /// Discard the draft
    Clear,
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
        /// Write to this path instead of the default location
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_with_no_subcommand() {
        let cli = Cli::try_parse_from(["quizkeep"]);
        assert!(cli.is_ok());
        assert!(cli.unwrap().command.is_none());
    }

    #[test]
    fn test_cli_help_flag_exits_with_help_error() {
        let result = Cli::try_parse_from(["quizkeep", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_version_flag_exits_with_version_error() {
        let result = Cli::try_parse_from(["quizkeep", "--version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_flag_is_global() {
        let cli = Cli::try_parse_from(["quizkeep", "next", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Next)));
    }

    #[test]
    fn test_show_command() {
        let cli = Cli::try_parse_from(["quizkeep", "show", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Show { json }) => assert!(json),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_select_by_text() {
        let cli = Cli::try_parse_from(["quizkeep", "select", "Paris"]).unwrap();
        match cli.command {
            Some(Commands::Select { option, number }) => {
                assert_eq!(option.as_deref(), Some("Paris"));
                assert!(number.is_none());
            }
            _ => panic!("Expected Select command"),
        }
    }

    #[test]
    fn test_select_by_number() {
        let cli = Cli::try_parse_from(["quizkeep", "select", "--number", "3"]).unwrap();
        match cli.command {
            Some(Commands::Select { option, number }) => {
                assert!(option.is_none());
                assert_eq!(number, Some(3));
            }
            _ => panic!("Expected Select command"),
        }
    }

    #[test]
    fn test_select_requires_option_or_number() {
        assert!(Cli::try_parse_from(["quizkeep", "select"]).is_err());
        assert!(Cli::try_parse_from(["quizkeep", "select", "Paris", "-n", "1"]).is_err());
    }

    #[test]
    fn test_delete_command() {
        let cli = Cli::try_parse_from(["quizkeep", "delete", "2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { number: 2 })));
    }

    #[test]
    fn test_draft_option_slot_range() {
        let cli = Cli::try_parse_from(["quizkeep", "draft", "option", "4", "Mars"]).unwrap();
        match cli.command {
            Some(Commands::Draft {
                action: DraftAction::Choice { slot, text },
            }) => {
                assert_eq!(slot, 4);
                assert_eq!(text, "Mars");
            }
            _ => panic!("Expected Draft option command"),
        }

        assert!(Cli::try_parse_from(["quizkeep", "draft", "option", "0", "x"]).is_err());
        assert!(Cli::try_parse_from(["quizkeep", "draft", "option", "5", "x"]).is_err());
    }

    #[test]
    fn test_draft_requires_subcommand() {
        assert!(Cli::try_parse_from(["quizkeep", "draft"]).is_err());
    }

    #[test]
    fn test_config_init_command() {
        let cli = Cli::try_parse_from(["quizkeep", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::Init { force, path },
            }) => {
                assert!(force);
                assert!(path.is_none());
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_validate_command() {
        let cli = Cli::try_parse_from(["quizkeep", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Validate
            })
        ));
    }

    #[test]
    fn test_invalid_command_fails() {
        let result = Cli::try_parse_from(["quizkeep", "invalid"]);
        assert!(result.is_err());
    }
}
