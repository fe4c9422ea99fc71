//! Configuration management module.

pub mod paths;
pub mod schema;
pub mod validation;

pub use paths::{PathError, Paths};
pub use schema::{AuthoringConfig, Config, ConfigError, LoggingConfig, StorageConfig};
pub use validation::{ValidationError, ValidationResult, ValidationWarning, validate_config};
