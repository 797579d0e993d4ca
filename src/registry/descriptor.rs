use super::render::{AsyncRender, Render, RenderError, RouteProps, SyncRender};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

/// Author-declared route node. `path` is relative to the parent.
///
/// A descriptor without `render` only groups its children under a shared
/// path; a layout descriptor must render, since its output holds the
/// outlet its descendants mount into.
pub struct RouteDescriptor<V> {
    pub path: String,
    pub render: Option<Rc<dyn Render<V>>>,
    pub mount_target: Option<String>,
    pub is_layout: bool,
    pub children: Vec<RouteDescriptor<V>>,
}

impl<V> RouteDescriptor<V> {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            render: None,
            mount_target: None,
            is_layout: false,
            children: Vec::new(),
        }
    }

    pub fn render<F, Fut>(mut self, render: F) -> Self
    where
        F: Fn(RouteProps) -> Fut + 'static,
        Fut: Future<Output = Result<V, RenderError>> + 'static,
    {
        self.render = Some(Rc::new(AsyncRender(render)));
        self
    }

    pub fn render_sync<F>(mut self, render: F) -> Self
    where
        V: 'static,
        F: Fn(RouteProps) -> Result<V, RenderError> + 'static,
    {
        self.render = Some(Rc::new(SyncRender(render)));
        self
    }

    pub fn render_with(mut self, render: Rc<dyn Render<V>>) -> Self {
        self.render = Some(render);
        self
    }

    pub fn mount_target(mut self, target: impl Into<String>) -> Self {
        self.mount_target = Some(target.into());
        self
    }

    pub fn layout(mut self) -> Self {
        self.is_layout = true;
        self
    }

    pub fn child(mut self, child: RouteDescriptor<V>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteDescriptor<V>>,
    {
        self.children.extend(children);
        self
    }
}

impl<V> fmt::Debug for RouteDescriptor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("has_render", &self.render.is_some())
            .field("mount_target", &self.mount_target)
            .field("is_layout", &self.is_layout)
            .field("children", &self.children)
            .finish()
    }
}
