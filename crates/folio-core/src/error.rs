use thiserror::Error;

/// Top-level error type for the Folio system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for FolioError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Action error: {0}")]
    Action(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(err: toml::ser::Error) -> Self {
        FolioError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
