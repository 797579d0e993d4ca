//! The document tree the router mounts views into.
//!
//! Rendering itself happens in route render functions; a [`Surface`] only
//! locates mount points, attaches finished views and reports whether a
//! previously attached node is still part of the document.

mod element;
mod memory;

pub use element::Element;
pub use memory::{MemorySurface, NodeId};

use crate::types::RouteId;

/// Attribute that marks the outlet placeholder inside a layout's output.
pub const OUTLET_ATTR: &str = "data-outlet";
/// Attribute written on the root node of every mounted layout.
pub const LAYOUT_ATTR: &str = "data-layout";

pub trait Surface {
    /// Detached output of a render function.
    type View;
    /// Handle to a node attached to the document.
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// Looks up a connected mount target by name.
    fn mount_target(&self, name: &str) -> Option<Self::Node>;

    /// Removes every child of `mount`.
    fn clear(&mut self, mount: &Self::Node);

    /// Appends `view` under `mount` and returns the new root node.
    fn attach(&mut self, mount: &Self::Node, view: Self::View) -> Self::Node;

    /// Finds the outlet placeholder within the subtree rooted at `root`.
    fn find_outlet(&self, root: &Self::Node) -> Option<Self::Node>;

    /// Tags a mounted layout root with its route identifier.
    fn mark_layout(&mut self, root: &Self::Node, layout: RouteId);

    fn is_connected(&self, node: &Self::Node) -> bool;
}
