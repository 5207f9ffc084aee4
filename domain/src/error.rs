use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed pixel buffer: {0}")]
    MalformedInput(String),

    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
