pub mod tracing;

pub use tracing::{TracingConfig, TracingError, TracingGuard, init_tracing};
