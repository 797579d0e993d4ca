mod error;
mod listener;
mod options;
mod service;

pub use error::{RouterError, RouterResult};
pub use listener::Listener;
pub use options::{
    BeforeResolve, ErrorHandler, NavigationOptions, NavigationOptionsBuilder, RouterConfig,
    RouterConfigBuilder, RouterConfigError,
};
pub use service::{CurrentRoute, Resolution, Router, RouterStatus};
