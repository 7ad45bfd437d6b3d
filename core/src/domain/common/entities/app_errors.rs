use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing data: {0}")]
    MissingField(String),

    #[error("Image format not allowed: {0}")]
    UnsupportedImageFormat(String),

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("History log is corrupt: {0}")]
    CorruptHistory(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal server error")]
    InternalServerError,
}
