use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store file corrupted: {0}")]
    Corrupted(String),

    #[error("Malformed snapshot value for key {key:?}: {reason}")]
    MalformedSnapshot { key: &'static str, reason: String },

    #[error("Lock acquisition timeout")]
    LockTimeout,
}

impl StateError {
    pub fn malformed(key: &'static str, reason: impl ToString) -> Self {
        Self::MalformedSnapshot {
            key,
            reason: reason.to_string(),
        }
    }
}
