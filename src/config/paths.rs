use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "quizkeep";
const CONFIG_ENV: &str = "QUIZKEEP_CONFIG";
const STATE_ENV: &str = "QUIZKEEP_STATE";

/// Where quizkeep keeps its config file and question stores.
///
/// `QUIZKEEP_CONFIG` names the config file and `QUIZKEEP_STATE` the store
/// directory; otherwise the platform directories from `dirs` are used.
pub struct Paths;

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory { path: PathBuf, source: io::Error },
}

impl Paths {
    pub fn config_file() -> PathBuf {
        env_path(CONFIG_ENV).unwrap_or_else(|| {
            platform_dir(dirs::config_dir())
                .join(APP_DIR)
                .join("config.toml")
        })
    }

    /// Directory holding one `<namespace>.json` store per namespace.
    pub fn state_dir() -> PathBuf {
        env_path(STATE_ENV).unwrap_or_else(|| {
            platform_dir(dirs::state_dir().or_else(dirs::data_local_dir)).join(APP_DIR)
        })
    }

    pub fn store_file(namespace: &str) -> PathBuf {
        Self::state_dir().join(format!("{namespace}.json"))
    }

    pub fn ensure_state_dir() -> Result<PathBuf, PathError> {
        let dir = Self::state_dir();
        fs::create_dir_all(&dir).map_err(|source| PathError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}
