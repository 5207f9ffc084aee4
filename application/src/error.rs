use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Image is required")]
    ImageRequired,

    #[error("Invalid image payload: {message}")]
    InvalidImagePayload { message: String },

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Forbidden")]
    Forbidden,

    #[error("Codec error: {message}")]
    CodecError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Task error: {message}")]
    TaskError { message: String },
}

pub type AppResult<T> = Result<T, AppError>;
