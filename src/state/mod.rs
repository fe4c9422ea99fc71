//! Persistence of quiz snapshots into a key-value store.

pub mod bridge;
pub mod error;
pub mod kv;
pub mod snapshot;

pub use bridge::PersistenceBridge;
pub use error::StateError;
pub use kv::{DEFAULT_LOCK_TIMEOUT, FileStore, KeyValueStore, MemoryStore};
pub use snapshot::Snapshot;
