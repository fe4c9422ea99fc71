use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;

use crate::config::{Config, Paths, validate_config};

pub fn handle_init(force: bool, custom_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = custom_path.unwrap_or_else(Paths::config_file);

    if config_path.exists() && !force && !confirm_overwrite(&config_path)? {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, generate_default_config_toml())?;
    set_file_permissions(&config_path);

    println!("Config created at {}", config_path.display());
    Ok(())
}

pub fn handle_show(config: &Config, json: bool) -> anyhow::Result<()> {
    let path = Paths::config_file();
    if !path.exists() {
        eprintln!("Using default configuration ({} not found)", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    println!();
    println!("# store: {}", config.store_path().display());
    Ok(())
}

pub fn handle_validate(config: &Config) -> anyhow::Result<()> {
    let result = validate_config(config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.field, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.field, error.message);
        if let Some(suggestion) = &error.suggestion {
            println!("  hint: {suggestion}");
        }
    }

    if !result.is_valid() {
        bail!("Configuration has {} error(s)", result.errors.len());
    }
    println!("Configuration is valid");
    Ok(())
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    print!(
        "Config already exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

fn set_file_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            eprintln!("Warning: failed to set config file permissions: {err}");
        }
    }
    #[cfg(not(unix))]
    let _ = path;
}

fn generate_default_config_toml() -> String {
    r#"# quizkeep configuration file

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"
# Also append logs to quizkeep.log in the state directory
log_to_file = false
# Emit JSON log lines
json = false

[storage]
# Store name; questions and progress live in <state_dir>/<namespace>.json
namespace = "default"
# Optional: explicit store file
# path = "/home/me/quiz.json"
# How long to wait for the store lock (milliseconds)
lock_timeout_ms = 2000

[authoring]
# Reject new questions whose correct answer is not one of the options
require_answer_in_options = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config_toml()).unwrap();
        assert_eq!(config, Config::default());
    }
}
