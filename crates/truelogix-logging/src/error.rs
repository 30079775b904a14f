use thiserror::Error;

/// Errors raised while configuring logging
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("log file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}
