use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to compress scanlines: {0}")]
    EncodingFailure(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl EncodeError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn encoding_failure(msg: impl Into<String>) -> Self {
        Self::EncodingFailure(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
