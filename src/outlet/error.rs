use crate::types::RouteId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutletError {
    #[error("layout {layout} ('{path}') rendered without an outlet placeholder")]
    MissingOutlet { layout: RouteId, path: String },
    #[error("route {route} refers to unknown layout {layout}")]
    UnknownLayout { route: RouteId, layout: RouteId },
    #[error("mount target '{target}' for route '{path}' is not in the document")]
    MountTargetNotFound { target: String, path: String },
}

pub type OutletResult<T> = Result<T, OutletError>;
