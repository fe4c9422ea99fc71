use tracing::{debug, info};

use super::error::StateError;
use super::kv::KeyValueStore;
use super::snapshot::Snapshot;

/// Mirrors quiz snapshots into a [`KeyValueStore`].
pub struct PersistenceBridge<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the stored snapshot, or the default question set when none is stored.
    pub fn load(&self) -> Result<Snapshot, StateError> {
        match Snapshot::decode(&self.store)? {
            Some(snapshot) => {
                debug!(
                    questions = snapshot.quiz.questions.len(),
                    index = snapshot.quiz.current_index,
                    "Snapshot restored"
                );
                Ok(snapshot)
            }
            None => {
                info!("No stored questions, starting from the default set");
                Ok(Snapshot::default())
            }
        }
    }

    pub fn save(&mut self, snapshot: &Snapshot) -> Result<(), StateError> {
        self.store.set_many(snapshot.encode()?)?;
        debug!("Snapshot persisted");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
