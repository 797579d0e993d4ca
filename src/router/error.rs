use super::RouterConfigError;
use crate::outlet::OutletError;
use crate::path::PathError;
use crate::registry::{RegistryError, RenderError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no routes provided")]
    NoRoutesProvided,
    #[error("no routes are registered")]
    EmptyRegistry,
    #[error("no route matched '{path}'")]
    NoMatch { path: String },
    #[error(transparent)]
    Registry(RegistryError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Outlet(#[from] OutletError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] RouterConfigError),
}

impl RouterError {
    /// Conditions handed to an `on_error` hook instead of being returned.
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            RouterError::NoRoutesProvided | RouterError::EmptyRegistry | RouterError::NoMatch { .. }
        )
    }
}

impl From<RegistryError> for RouterError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NoRoutesProvided => RouterError::NoRoutesProvided,
            RegistryError::Path(path) => RouterError::Path(path),
            other => RouterError::Registry(other),
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
