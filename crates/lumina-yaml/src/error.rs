//! Error types for chart configuration.

use thiserror::Error;

/// Error type for configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the chart cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// Color is neither a base color name nor a hex string
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
