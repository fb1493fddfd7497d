//! Error types for mapping generation

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mapping operations
#[derive(Error, Debug)]
pub enum MappingError {
    /// A class-level or attribute-level render call arrived before the
    /// rendering kind of the same type was set
    #[error("Cannot {operation} for '{type_name}': rendering kind has not been set")]
    RenderingKindNotSet {
        /// Type the call targeted
        type_name: String,
        /// Operation that was attempted
        operation: &'static str,
    },

    /// The classifier produced an outcome the generator cannot act on
    #[error("Classifier outcome for '{type_name}' cannot be rendered: {detail}")]
    ClassifierMismatch {
        /// Type being rendered
        type_name: String,
        /// What was inconsistent
        detail: String,
    },

    /// Invalid type model
    #[error("Invalid type model: {message}")]
    ModelError {
        /// Error message
        message: String,
        /// Type or document location if available
        location: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The accumulated document could not be formatted
    #[error("Document formatting failed: {0}")]
    FormatError(String),

    /// Writing a mapping document failed
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        /// Target file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// IO errors without a known target
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for mapping operations
pub type Result<T> = std::result::Result<T, MappingError>;

impl MappingError {
    /// Create a rendering-kind contract error
    #[must_use]
    pub fn kind_not_set(type_name: impl Into<String>, operation: &'static str) -> Self {
        Self::RenderingKindNotSet {
            type_name: type_name.into(),
            operation,
        }
    }

    /// Create a classifier mismatch error
    #[must_use]
    pub fn classifier_mismatch(type_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ClassifierMismatch {
            type_name: type_name.into(),
            detail: detail.into(),
        }
    }

    /// Create a new model error
    #[must_use]
    pub fn model(message: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new model error pointing at a type or document location
    #[must_use]
    pub fn model_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a formatting error
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::FormatError(message.into())
    }

    /// Create an IO error bound to the file it concerns
    #[must_use]
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error signals a caller bug rather than bad input
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::RenderingKindNotSet { .. } | Self::ClassifierMismatch { .. }
        )
    }
}

impl From<serde_yaml::Error> for MappingError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
