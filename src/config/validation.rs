use std::path::Path;

use crate::config::schema::Config;

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

pub fn validate_config(config: &Config) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    validate_log_level(&config.logging.level, &mut errors);
    validate_namespace(&config.storage.namespace, &mut errors);

    if config.storage.lock_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "storage.lock_timeout_ms".to_string(),
            message: "Lock timeout must be positive".to_string(),
            suggestion: Some("Use a value of at least 1 ms".to_string()),
        });
    }

    if let Some(path) = config.storage.path.as_deref() {
        validate_file_parent_path("storage.path", path, &mut errors, &mut warnings);
    }

    ValidationResult { errors, warnings }
}

fn validate_log_level(level: &str, errors: &mut Vec<ValidationError>) {
    let level = level.trim().to_lowercase();
    let valid = ["trace", "debug", "info", "warn", "error"];
    if !valid.iter().any(|value| *value == level) {
        errors.push(ValidationError {
            field: "logging.level".to_string(),
            message: format!("Invalid log level: {level}"),
            suggestion: Some(format!("Valid levels: {}", valid.join(", "))),
        });
    }
}

fn validate_namespace(namespace: &str, errors: &mut Vec<ValidationError>) {
    if namespace.trim().is_empty() {
        errors.push(ValidationError {
            field: "storage.namespace".to_string(),
            message: "Namespace cannot be empty".to_string(),
            suggestion: Some("Use a short name such as \"default\"".to_string()),
        });
        return;
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    if !namespace.chars().all(allowed) {
        errors.push(ValidationError {
            field: "storage.namespace".to_string(),
            message: format!("Invalid namespace: {namespace}"),
            suggestion: Some("Use only letters, digits, '-' and '_'".to_string()),
        });
    }
}

fn validate_file_parent_path(
    field: &str,
    path: &Path,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if path.is_dir() {
        errors.push(ValidationError {
            field: field.to_string(),
            message: format!(
                "Expected a file path but found a directory: {}",
                path.display()
            ),
            suggestion: None,
        });
        return;
    }

    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() || parent.exists() => {}
        Some(parent) => warnings.push(ValidationWarning {
            field: field.to_string(),
            message: format!(
                "Parent directory does not exist yet but can be created: {}",
                parent.display()
            ),
        }),
        None => errors.push(ValidationError {
            field: field.to_string(),
            message: "Invalid file path".to_string(),
            suggestion: Some("Update the path to a valid file location".to_string()),
        }),
    }
}
