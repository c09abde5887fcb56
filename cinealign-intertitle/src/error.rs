use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    #[error("Style sampling failed for frame {frame}: {message}")]
    StyleSample { frame: i64, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
