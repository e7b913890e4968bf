//! Error types for ReviewCheck

use crate::types::ModelDiagnostics;

/// Result type alias using ReviewCheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewCheck operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Review text was blank after trimming
    #[error("empty text: provide a non-empty review text")]
    EmptyText,

    /// Probabilistic engine selected but no model artifact is loaded
    #[error("model not loaded ({0})")]
    ModelUnavailable(ModelDiagnostics),

    /// A located artifact does not expose a usable vectorizer/classifier pair
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// Classifier execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new invalid artifact error
    pub fn invalid_artifact(msg: impl Into<String>) -> Self {
        Self::InvalidArtifact(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error means the model artifact cannot be used.
    ///
    /// Callers treat `ModelUnavailable` and `InvalidArtifact` the same way.
    pub fn is_model_error(&self) -> bool {
        matches!(self, Self::ModelUnavailable(_) | Self::InvalidArtifact(_))
    }

    /// Diagnostics attached to a `ModelUnavailable` error, if any
    pub fn diagnostics(&self) -> Option<&ModelDiagnostics> {
        match self {
            Self::ModelUnavailable(diag) => Some(diag),
            _ => None,
        }
    }

    /// Short machine-readable kind, used for metric labels and API bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
            Self::ModelUnavailable(_) => "model_unavailable",
            Self::InvalidArtifact(_) => "invalid_artifact",
            Self::Classifier(_) => "classifier",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Internal(_) => "internal",
        }
    }
}
