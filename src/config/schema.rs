use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::quiz::AuthoringPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Root configuration for quizkeep.
///
/// Example:
/// ```toml
/// [logging]
/// level = "warn"
///
/// [storage]
/// namespace = "default"
///
/// [authoring]
/// require_answer_in_options = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Logging configuration section.
    /// Example: [logging]
    pub logging: LoggingConfig,
    /// Question store configuration section.
    /// Example: [storage]
    pub storage: StorageConfig,
    /// Question authoring configuration section.
    /// Example: [authoring]
    pub authoring: AuthoringConfig,
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the platform config path and apply environment overrides.
    pub fn load_effective() -> Result<Self, ConfigError> {
        let mut config = Self::load(&Paths::config_file())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `QUIZKEEP_*` overrides. Returns true if any were applied.
    pub fn apply_env_overrides(&mut self) -> bool {
        let mut applied = false;
        if let Ok(level) = std::env::var("QUIZKEEP_LOG_LEVEL") {
            self.logging.level = level;
            applied = true;
        }
        if let Ok(namespace) = std::env::var("QUIZKEEP_NAMESPACE") {
            self.storage.namespace = namespace;
            applied = true;
        }
        applied
    }

    /// Resolved location of the question store.
    pub fn store_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Paths::store_file(&self.storage.namespace))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    /// Example: level = "warn"
    pub level: String,
    /// Also append logs to quizkeep.log in the state directory.
    /// Example: log_to_file = false
    pub log_to_file: bool,
    /// Emit JSON log lines.
    /// Example: json = false
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_to_file: false,
            json: false,
        }
    }
}

/// Question store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Store name; the store lives at <state_dir>/<namespace>.json.
    /// Example: namespace = "default"
    pub namespace: String,
    /// Explicit store file, overriding namespace resolution.
    /// Example: path = "/home/me/quiz.json"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// How long to wait for the store lock (milliseconds).
    /// Example: lock_timeout_ms = 2000
    pub lock_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            path: None,
            lock_timeout_ms: 2000,
        }
    }
}

/// Question authoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthoringConfig {
    /// Reject questions whose correct answer is not one of the options.
    /// Example: require_answer_in_options = false
    pub require_answer_in_options: bool,
}

impl From<&AuthoringConfig> for AuthoringPolicy {
    fn from(config: &AuthoringConfig) -> Self {
        Self {
            require_answer_in_options: config.require_answer_in_options,
        }
    }
}
