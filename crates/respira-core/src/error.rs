//! Error types for Respira

/// Result type alias using Respira's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Respira operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Model artifact errors (download, missing file, bad format)
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Model evaluation errors
    #[error("model error: {0}")]
    Model(String),

    /// Patient input validation errors
    #[error("input error: {0}")]
    Input(String),

    /// Network/IO errors
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
    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is recoverable within a running session.
    ///
    /// Input and evaluation failures leave the form usable; artifact
    /// failures happen before the server accepts requests and are fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Model(_) | Self::Input(_) | Self::Serialization(_)
        )
    }
}
