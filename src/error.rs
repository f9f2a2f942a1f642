//! Error types for the edgestack synthesizer.
//!
//! This module provides the error hierarchy for the two phases of a build:
//! configuration resolution and template synthesis. There are no retries and
//! no partial results anywhere in the crate; a build either fully resolves a
//! resource graph or aborts before producing one.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the edgestack synthesizer.
#[derive(Debug, Error)]
pub enum EdgestackError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template synthesis errors.
    #[error("Synthesis error: {0}")]
    Synth(#[from] SynthError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The context file was not found.
    #[error("Context file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The context file could not be parsed.
    #[error("Failed to parse context: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// The requested environment has no configuration record.
    ///
    /// This is the only fatal condition the resolver itself raises: synthesis
    /// aborts before any resource descriptor is composed.
    #[error("Environment '{name}' is not defined in the context file")]
    EnvironmentNotFound {
        /// The requested environment name.
        name: String,
    },

    /// Validation failed.
    #[error("Configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },

    /// Environment variable is missing.
    #[error("Missing environment variable: {name}")]
    MissingEnvVar {
        /// Name of the missing variable.
        name: String,
    },

    /// Duplicate path pattern in the behavior settings.
    #[error("Duplicate behavior path pattern: {pattern}")]
    DuplicatePathPattern {
        /// The duplicated path pattern.
        pattern: String,
    },
}

/// Template synthesis errors.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A logical id was registered twice in the same stack.
    #[error("Duplicate logical id in stack '{stack}': {logical_id}")]
    DuplicateLogicalId {
        /// Name of the stack being synthesized.
        stack: String,
        /// The duplicated logical id.
        logical_id: String,
    },

    /// An output name was registered twice. Outputs are write-once.
    #[error("Duplicate output in stack '{stack}': {name}")]
    DuplicateOutput {
        /// Name of the stack being synthesized.
        stack: String,
        /// The duplicated output name.
        name: String,
    },

    /// A resource descriptor could not be serialized.
    #[error("Failed to serialize resource '{logical_id}': {message}")]
    SerializationError {
        /// Logical id of the resource.
        logical_id: String,
        /// Description of the serialization failure.
        message: String,
    },
}

/// Result type alias for edgestack operations.
pub type Result<T> = std::result::Result<T, EdgestackError>;

impl EdgestackError {
    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this error means the requested environment is absent
    /// from the context store.
    #[must_use]
    pub const fn is_missing_environment(&self) -> bool {
        matches!(self, Self::Config(ConfigError::EnvironmentNotFound { .. }))
    }
}

impl ConfigError {
    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a validation error without a specific field.
    #[must_use]
    pub fn validation_general(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: None,
        }
    }
}

impl SynthError {
    /// Creates a serialization error for a logical id.
    #[must_use]
    pub fn serialization(logical_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SerializationError {
            logical_id: logical_id.into(),
            message: message.into(),
        }
    }
}
