use std::io;
use thiserror::Error;

/// Common result type for cliptoc operations
pub type CliptocResult<T> = Result<T, CliptocError>;

/// Error types for cliptoc operations
#[derive(Debug, Error)]
pub enum CliptocError {
    /// IO error wrapper (input/output files)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Clipboard could not be opened, read or written
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
    /// Markdown processing error
    #[error("Markdown error: {0}")]
    Markdown(String),
}

impl CliptocError {
    /// Shorthand for a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CliptocError::Config(msg.into())
    }

    /// Shorthand for a markdown processing error
    pub fn markdown(msg: impl Into<String>) -> Self {
        CliptocError::Markdown(msg.into())
    }
}
