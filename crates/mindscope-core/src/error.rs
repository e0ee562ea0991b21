use thiserror::Error;

/// Top-level error type for the MindScope system.
///
/// Startup faults (configuration, missing secrets, binding the server) are
/// reported through this type and are fatal. Per-interaction faults live in
/// `mindscope_chat::ChatError` and never escape a running session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MindscopeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} not found in environment variables. Please check your .env file.")]
    MissingSecret(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MindscopeError {
    fn from(err: toml::de::Error) -> Self {
        MindscopeError::Config(err.to_string())
    }
}

/// A specialized `Result` type for MindScope operations.
pub type Result<T> = std::result::Result<T, MindscopeError>;
