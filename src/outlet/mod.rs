mod error;
mod mounts;
mod resolver;

pub use error::{OutletError, OutletResult};
pub use mounts::{LayoutMount, LayoutMounts};
pub use resolver::{MountPoint, OutletResolver};
