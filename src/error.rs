use thiserror::Error;

/// Unified error type for release-level operations
#[derive(Error, Debug)]
pub enum ReleaseLevelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Unknown release level: {0}")]
    Level(String),

    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-level
pub type Result<T> = std::result::Result<T, ReleaseLevelError>;

impl ReleaseLevelError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseLevelError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseLevelError::Version(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        ReleaseLevelError::Pattern(msg.into())
    }

    /// Create an unknown-level error with context
    pub fn level(msg: impl Into<String>) -> Self {
        ReleaseLevelError::Level(msg.into())
    }
}
