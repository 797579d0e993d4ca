use super::{LayoutMounts, OutletError};
use crate::registry::{RouteInstance, RouteProps, RouteTable};
use crate::router::RouterResult;
use crate::surface::Surface;
use crate::types::RouteId;
use futures::future::{FutureExt, LocalBoxFuture};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Where a route's view attaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountPoint<N> {
    Ready(N),
    /// A newer resolution was issued while `layout` was rendering; nothing
    /// was attached.
    Superseded { layout: RouteId },
}

/// Finds where a route's view attaches, mounting missing ancestor layouts on
/// the way. Ancestors are always mounted before their descendants.
pub struct OutletResolver<'a, S: Surface> {
    surface: &'a Mutex<S>,
    layouts: &'a Mutex<LayoutMounts<S::Node>>,
    table: &'a RouteTable<S::View>,
    sequence: u64,
    latest: Option<&'a AtomicU64>,
}

impl<'a, S: Surface> OutletResolver<'a, S> {
    pub fn new(
        surface: &'a Mutex<S>,
        layouts: &'a Mutex<LayoutMounts<S::Node>>,
        table: &'a RouteTable<S::View>,
    ) -> Self {
        Self {
            surface,
            layouts,
            table,
            sequence: 0,
            latest: None,
        }
    }

    /// Abandons layout mounts once `latest` moves past `sequence`.
    pub fn guard_sequence(mut self, latest: &'a AtomicU64, sequence: u64) -> Self {
        self.latest = Some(latest);
        self.sequence = sequence;
        self
    }

    pub fn is_superseded(&self) -> bool {
        self.latest
            .is_some_and(|latest| latest.load(Ordering::Relaxed) != self.sequence)
    }

    pub fn resolve_mount_point<'r>(
        &'r self,
        instance: &'r RouteInstance<S::View>,
        props: &'r RouteProps,
    ) -> LocalBoxFuture<'r, RouterResult<MountPoint<S::Node>>> {
        async move {
            let Some(layout_id) = instance.parent_layout() else {
                return self.own_target(instance).map(MountPoint::Ready);
            };

            {
                let surface = self.surface.lock();
                if let Some(outlet) = self.layouts.lock().live_outlet(layout_id, &*surface) {
                    tracing::trace!(route = %instance.id(), layout = %layout_id, "reusing mounted layout");
                    return Ok(MountPoint::Ready(outlet));
                }
            }

            let layout = self
                .table
                .get(layout_id)
                .ok_or(OutletError::UnknownLayout {
                    route: instance.id(),
                    layout: layout_id,
                })?;

            match self.resolve_mount_point(layout, props).await? {
                MountPoint::Ready(layout_mount) => {
                    self.mount_layout(layout, &layout_mount, props).await
                }
                superseded => Ok(superseded),
            }
        }
        .boxed_local()
    }

    fn own_target(&self, instance: &RouteInstance<S::View>) -> RouterResult<S::Node> {
        self.surface
            .lock()
            .mount_target(instance.mount_target())
            .ok_or_else(|| {
                OutletError::MountTargetNotFound {
                    target: instance.mount_target().to_string(),
                    path: instance.path().to_string(),
                }
                .into()
            })
    }

    async fn mount_layout(
        &self,
        layout: &RouteInstance<S::View>,
        mount: &S::Node,
        props: &RouteProps,
    ) -> RouterResult<MountPoint<S::Node>> {
        tracing::debug!(layout = %layout.id(), path = %layout.path(), "rendering ancestor layout");
        let view = layout.render(props.for_route(layout.id())).await?;

        if self.is_superseded() {
            tracing::warn!(
                layout = %layout.id(),
                sequence = self.sequence,
                "discarding layout render superseded by a newer navigation"
            );
            return Ok(MountPoint::Superseded { layout: layout.id() });
        }

        let mut surface = self.surface.lock();
        surface.clear(mount);
        let root = surface.attach(mount, view);
        surface.mark_layout(&root, layout.id());

        let mut layouts = self.layouts.lock();
        layouts.prune(&*surface);

        let outlet = surface
            .find_outlet(&root)
            .ok_or_else(|| OutletError::MissingOutlet {
                layout: layout.id(),
                path: layout.path().to_string(),
            })?;
        layouts.insert(layout.id(), root, outlet.clone());
        Ok(MountPoint::Ready(outlet))
    }

    /// Records a layout that was mounted as the navigated route itself, so
    /// later descendants reuse it. Layouts without an outlet are not recorded.
    pub fn record_layout(&self, layout: &RouteInstance<S::View>, root: &S::Node) {
        let mut surface = self.surface.lock();
        surface.mark_layout(root, layout.id());
        if let Some(outlet) = surface.find_outlet(root) {
            self.layouts
                .lock()
                .insert(layout.id(), root.clone(), outlet);
        }
    }
}
