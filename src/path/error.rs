use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("path prefix '{prefix}' must start with '/' and name at least one segment")]
    InvalidPrefix { prefix: String },
}

pub type PathResult<T> = Result<T, PathError>;
