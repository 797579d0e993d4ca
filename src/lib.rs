//! Hierarchical client-side navigation.
//!
//! A tree of [`RouteDescriptor`]s is flattened into a [`RouteTable`] of
//! absolute, uniquely identified routes. Each navigation matches the current
//! location against that table, mounts any missing ancestor layouts, and
//! attaches the matched route's view into its layout's outlet or its own
//! mount target on the [`Surface`].

pub mod history;
pub mod matcher;
pub mod outlet;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod router;
pub mod surface;
pub mod types;

pub use history::{History, HistoryEvent, MemoryHistory, Subscription};
pub use matcher::{MatchOrder, PotentialMatch};
pub use registry::{RenderError, RouteDescriptor, RouteInstance, RouteProps, RouteTable};
pub use router::{
    CurrentRoute, Listener, NavigationOptions, Resolution, Router, RouterConfig, RouterError,
    RouterResult, RouterStatus,
};
pub use surface::{Element, MemorySurface, Surface};
pub use types::{DEFAULT_MOUNT_TARGET, RouteId, RouteParams};
