use crate::config::LoggingConfig;
use crate::config::paths::{PathError, Paths};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "quizkeep.log";

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    pub log_to_file: bool,
    pub log_to_stderr: bool,
    pub json_format: bool,
    /// Force `level`, ignoring RUST_LOG.
    pub force_level: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_to_file: false,
            log_to_stderr: true,
            json_format: false,
            force_level: false,
        }
    }
}

impl TracingConfig {
    /// Build from the `[logging]` section. `debug` forces debug level.
    pub fn from_logging(logging: &LoggingConfig, debug: bool) -> Self {
        let level = if debug {
            Level::DEBUG
        } else {
            logging
                .level
                .trim()
                .parse::<Level>()
                .unwrap_or(Level::WARN)
        };
        Self {
            level,
            log_to_file: logging.log_to_file,
            json_format: logging.json,
            force_level: debug,
            ..Self::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize state directory: {0}")]
    StateDir(#[from] PathError),

    #[error("Failed to open log file {path}: {source}")]
    LogFileOpen { path: PathBuf, source: io::Error },
}

/// Keeps the subscriber installed; flushes the log file on drop.
#[derive(Debug)]
pub struct TracingGuard {
    _default_guard: tracing::subscriber::DefaultGuard,
    file: Option<Arc<Mutex<File>>>,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            if let Ok(mut handle) = file.lock() {
                let _ = handle.flush();
            }
        }
    }
}

struct FileWriter {
    file: Arc<Mutex<File>>,
}

impl io::Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?;
        guard.flush()
    }
}

#[derive(Clone)]
struct FileMakeWriter {
    file: Arc<Mutex<File>>,
}

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriter {
            file: Arc::clone(&self.file),
        }
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn fmt_layer<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

pub fn init_tracing(config: &TracingConfig) -> Result<TracingGuard, TracingError> {
    let env_filter = resolve_env_filter(config);

    let file = if config.log_to_file {
        let dir = Paths::ensure_state_dir()?;
        let path = dir.join(LOG_FILE_NAME);
        let file = File::options()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TracingError::LogFileOpen { path, source })?;
        Some(Arc::new(Mutex::new(file)))
    } else {
        None
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.log_to_stderr {
        layers.push(fmt_layer(std::io::stderr, config.json_format));
    }
    if let Some(file) = &file {
        let writer = FileMakeWriter {
            file: Arc::clone(file),
        };
        layers.push(fmt_layer(writer, config.json_format));
    }

    let default_guard = tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .set_default();

    Ok(TracingGuard {
        _default_guard: default_guard,
        file,
    })
}

fn resolve_env_filter(config: &TracingConfig) -> EnvFilter {
    if config.force_level {
        EnvFilter::new(config.level.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ENV_LOCK;
    use std::env;

    fn set_env_var(key: &str, value: impl AsRef<std::ffi::OsStr>) {
        unsafe {
            env::set_var(key, value);
        }
    }

    fn remove_env_var(key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    fn default_config_is_warn_stderr_pretty() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.log_to_file);
        assert!(config.log_to_stderr);
        assert!(!config.json_format);
    }

    #[test]
    fn from_logging_reads_level_and_debug_flag() {
        let logging = LoggingConfig {
            level: "info".to_string(),
            log_to_file: true,
            json: true,
        };
        let config = TracingConfig::from_logging(&logging, false);
        assert_eq!(config.level, Level::INFO);
        assert!(config.log_to_file);
        assert!(config.json_format);
        assert!(!config.force_level);

        let config = TracingConfig::from_logging(&logging, true);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.force_level);
    }

    #[test]
    fn env_filter_uses_rust_log_when_set() {
        let _lock = ENV_LOCK.lock().unwrap();
        set_env_var("RUST_LOG", "error");
        let filter = resolve_env_filter(&TracingConfig::default());
        assert!(filter.to_string().contains("error"));
        remove_env_var("RUST_LOG");
    }

    #[test]
    fn forced_level_overrides_rust_log() {
        let _lock = ENV_LOCK.lock().unwrap();
        set_env_var("RUST_LOG", "error");
        let config = TracingConfig {
            level: Level::DEBUG,
            force_level: true,
            ..TracingConfig::default()
        };
        let filter = resolve_env_filter(&config);
        assert!(filter.to_string().contains("debug"));
        remove_env_var("RUST_LOG");
    }

    #[test]
    fn init_tracing_writes_json_log_entry() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();

        set_env_var("QUIZKEEP_STATE", temp.path());
        remove_env_var("RUST_LOG");

        let config = TracingConfig {
            level: Level::INFO,
            log_to_file: true,
            log_to_stderr: false,
            json_format: true,
            force_level: false,
        };

        let guard = init_tracing(&config).unwrap();
        tracing::info!(question_count = 2, "telemetry test log");
        drop(guard);

        let contents = std::fs::read_to_string(temp.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("telemetry test log"));
        assert!(contents.contains("\"level\""));
        assert!(contents.contains("question_count"));

        remove_env_var("QUIZKEEP_STATE");
    }
}
