use crate::types::{RouteId, RouteParams};
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("render failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What a render function receives for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteProps {
    pub route: RouteId,
    pub path: String,
    pub params: RouteParams,
}

impl RouteProps {
    pub(crate) fn for_route(&self, route: RouteId) -> Self {
        Self {
            route,
            path: self.path.clone(),
            params: self.params.clone(),
        }
    }
}

pub type RenderFuture<V> = LocalBoxFuture<'static, Result<V, RenderError>>;

/// Produces the view for a route, possibly asynchronously.
pub trait Render<V> {
    fn render(&self, props: RouteProps) -> RenderFuture<V>;
}

pub struct AsyncRender<F>(pub F);

impl<V, F, Fut> Render<V> for AsyncRender<F>
where
    F: Fn(RouteProps) -> Fut,
    Fut: Future<Output = Result<V, RenderError>> + 'static,
{
    fn render(&self, props: RouteProps) -> RenderFuture<V> {
        (self.0)(props).boxed_local()
    }
}

pub struct SyncRender<F>(pub F);

impl<V, F> Render<V> for SyncRender<F>
where
    V: 'static,
    F: Fn(RouteProps) -> Result<V, RenderError>,
{
    fn render(&self, props: RouteProps) -> RenderFuture<V> {
        future::ready((self.0)(props)).boxed_local()
    }
}
