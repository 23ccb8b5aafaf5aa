use thiserror::Error;

/// Top-level error type for the Daebak order assistant.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for DaebakError`
/// (or the reverse) so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DaebakError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Speech capture is not supported on this device")]
    CaptureUnsupported,

    #[error("Interpretation service error: {0}")]
    Service(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DaebakError {
    fn from(err: toml::de::Error) -> Self {
        DaebakError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DaebakError {
    fn from(err: toml::ser::Error) -> Self {
        DaebakError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DaebakError {
    fn from(err: serde_json::Error) -> Self {
        DaebakError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Daebak operations.
pub type Result<T> = std::result::Result<T, DaebakError>;
