use super::render::{Render, RenderFuture, RouteProps};
use crate::pattern::CompiledPattern;
use crate::types::RouteId;
use std::fmt;
use std::rc::Rc;

/// Flattened, absolute-path entry derived from one rendering descriptor.
pub struct RouteInstance<V> {
    pub(crate) id: RouteId,
    pub(crate) path: String,
    pub(crate) pattern: CompiledPattern,
    pub(crate) render: Rc<dyn Render<V>>,
    pub(crate) mount_target: String,
    pub(crate) is_layout: bool,
    pub(crate) parent_layout: Option<RouteId>,
    pub(crate) depth: usize,
}

impl<V> RouteInstance<V> {
    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn mount_target(&self) -> &str {
        &self.mount_target
    }

    pub fn is_layout(&self) -> bool {
        self.is_layout
    }

    pub fn parent_layout(&self) -> Option<RouteId> {
        self.parent_layout
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn render(&self, props: RouteProps) -> RenderFuture<V> {
        self.render.render(props)
    }
}

impl<V> fmt::Debug for RouteInstance<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteInstance")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("mount_target", &self.mount_target)
            .field("is_layout", &self.is_layout)
            .field("parent_layout", &self.parent_layout)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
