use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route template '{template}' compiled to an invalid matcher: {message}")]
    InvalidRegex { template: String, message: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
