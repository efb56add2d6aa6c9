//! Error types for settings loading and validation.
//!
//! Settings can fail in exactly three ways: the named file is absent,
//! figment cannot assemble the layers, or the assembled values fail
//! shape validation. There is no direct I/O here; file reads happen
//! inside figment's providers.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Unified settings error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    FileNotFound(PathBuf),

    /// One or more settings fields failed validation.
    #[error("Invalid settings:\n{}", render_field_errors(.0))]
    Validation(#[source] ValidationErrors),

    /// Figment could not parse or merge the settings layers.
    #[error("Settings parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

/// One line per failed field: `  - <field>: <message>`.
fn render_field_errors(errors: &ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("  - {}: {}", field, message)
            })
        })
        .collect();
    lines.sort();
    lines.join("\n")
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
