mod builder;
mod descriptor;
mod error;
mod instance;
mod render;
mod stats;
mod table;

pub use builder::{BuildOptions, build_table};
pub use descriptor::RouteDescriptor;
pub use error::{RegistryError, RegistryResult};
pub use instance::RouteInstance;
pub use render::{AsyncRender, Render, RenderError, RenderFuture, RouteProps, SyncRender};
pub use stats::RegistryStats;
pub use table::RouteTable;
