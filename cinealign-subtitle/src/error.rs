use thiserror::Error;

/// Errors that can occur when reading or writing subtitle files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubtitleError {
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type for subtitle operations.
pub type SubtitleResult<T> = Result<T, SubtitleError>;
