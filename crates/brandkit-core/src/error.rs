//! Centralized error types for Brandkit.

use thiserror::Error;

/// Main error type for Brandkit operations.
#[derive(Error, Debug)]
pub enum BrandkitError {
    /// One or more required brand fields were missing or blank.
    #[error("Validation error: required fields are empty: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// A stage that must be total failed. Always a programming defect.
    #[error("Internal generation error: {0}")]
    InternalGeneration(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for Brandkit operations.
pub type BrandkitResult<T> = Result<T, BrandkitError>;

impl BrandkitError {
    /// Create a validation error for the given field names.
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an internal generation error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalGeneration(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error was caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
