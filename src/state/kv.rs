use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::error::StateError;

pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(2);

/// String-keyed, string-valued persistent storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StateError>;

    /// Write several entries. Implementations may make this a single write.
    fn set_many(&mut self, entries: Vec<(&'static str, String)>) -> Result<(), StateError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Volatile store, mainly for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store kept as one JSON object on disk.
///
/// Entries are read once on open. Every write rewrites the whole file through
/// a temp file and rename while holding an exclusive lock on `<file>.lock`.
pub struct FileStore {
    path: PathBuf,
    lock_path: PathBuf,
    lock_timeout: Duration,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: PathBuf) -> Result<Self, StateError> {
        Self::open_with_timeout(path, DEFAULT_LOCK_TIMEOUT)
    }

    pub fn open_with_timeout(path: PathBuf, lock_timeout: Duration) -> Result<Self, StateError> {
        let lock_path = sibling(&path, ".lock");
        let mut store = Self {
            path,
            lock_path,
            lock_timeout,
            entries: BTreeMap::new(),
        };
        if store.path.exists() {
            store.entries = store.read_entries()?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StateError> {
        let lock_file = self.open_lock_file()?;
        self.lock_shared_with_timeout(&lock_file)?;

        let mut file = File::open(&self.path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                self.backup_corrupted()?;
                Err(StateError::Corrupted(err.to_string()))
            }
        }
    }

    fn flush(&self) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock_file = self.open_lock_file()?;
        self.lock_exclusive_with_timeout(&lock_file)?;

        let temp_path = sibling(&self.path, ".tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;

        let contents = serde_json::to_string_pretty(&self.entries)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.sync_all()?;

        apply_owner_permissions(&temp_path)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), entries = self.entries.len(), "Store written");
        Ok(())
    }

    fn open_lock_file(&self) -> Result<File, StateError> {
        if let Some(parent) = self.lock_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)?;
        apply_owner_permissions(&self.lock_path)?;
        Ok(file)
    }

    fn lock_shared_with_timeout(&self, file: &File) -> Result<(), StateError> {
        self.lock_with_timeout(|| fs2::FileExt::try_lock_shared(file))
    }

    fn lock_exclusive_with_timeout(&self, file: &File) -> Result<(), StateError> {
        self.lock_with_timeout(|| fs2::FileExt::try_lock_exclusive(file))
    }

    fn lock_with_timeout<F>(&self, mut try_lock: F) -> Result<(), StateError>
    where
        F: FnMut() -> std::io::Result<()>,
    {
        let start = Instant::now();
        loop {
            match try_lock() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    if start.elapsed() >= self.lock_timeout {
                        return Err(StateError::LockTimeout);
                    }
                    sleep(Duration::from_millis(50));
                }
                Err(err) => return Err(StateError::Io(err)),
            }
        }
    }

    fn backup_corrupted(&self) -> Result<(), StateError> {
        let backup_path = sibling(&self.path, ".bak");
        warn!(
            original = %self.path.display(),
            backup = %backup_path.display(),
            "Backing up corrupted store file"
        );
        fs::copy(&self.path, &backup_path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn set_many(&mut self, entries: Vec<(&'static str, String)>) -> Result<(), StateError> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value);
        }
        self.flush()
    }
}

/// `store.json` -> `store.json<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

fn apply_owner_permissions(path: &Path) -> Result<(), StateError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
