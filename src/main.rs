use clap::Parser;

use quizkeep::cli::{Cli, commands};
use quizkeep::config::Config;
use quizkeep::telemetry::{TracingConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_effective()?;
    let _tracing = init_tracing(&TracingConfig::from_logging(&config.logging, cli.debug))?;

    match cli.command {
        Some(command) => commands::run(command, &config),
        None => commands::quiz::handle_show(&config, false),
    }
}
