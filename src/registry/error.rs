use crate::path::PathError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no routes provided")]
    NoRoutesProvided,
    #[error("layout route '{path}' has no render function")]
    LayoutWithoutRender { path: String },
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
