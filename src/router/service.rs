use super::{Listener, NavigationOptions, RouterError, RouterResult};
use crate::history::{History, HistoryEvent, HistoryListener, is_internal_href};
use crate::matcher;
use crate::outlet::{LayoutMounts, MountPoint, OutletResolver};
use crate::path::{PathResult, apply_prefix, split_location};
use crate::registry::{RouteDescriptor, RouteProps, RouteTable, build_table};
use crate::surface::Surface;
use crate::types::{RouteId, RouteParams};
use parking_lot::{Mutex, RwLock};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterStatus {
    Idle,
    Resolving,
}

/// Outcome of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Rendered { route: RouteId, sequence: u64 },
    /// `before_resolve` rejected the candidate.
    Cancelled { route: RouteId },
    /// A newer resolution was issued while this render was pending.
    Stale { route: RouteId, sequence: u64 },
    /// The condition was handed to the `on_error` hook.
    Reported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    pub route: RouteId,
    pub path: String,
    pub params: RouteParams,
    pub sequence: u64,
}

struct RouterState<V> {
    table: Option<Rc<RouteTable<V>>>,
    options: NavigationOptions<V>,
    current: Option<CurrentRoute>,
}

struct RouterShared<S: Surface, H> {
    state: RwLock<RouterState<S::View>>,
    surface: Mutex<S>,
    layouts: Mutex<LayoutMounts<S::Node>>,
    history: H,
    sequence: AtomicU64,
    in_flight: AtomicUsize,
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Navigation controller. Owns its route table, the document surface and
/// the history it drives; clones share all of them.
pub struct Router<S: Surface, H: History> {
    shared: Rc<RouterShared<S, H>>,
}

impl<S: Surface, H: History> Clone for Router<S, H> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S: Surface, H: History> Router<S, H> {
    pub fn new(surface: S, history: H) -> Self {
        Self {
            shared: Rc::new(RouterShared {
                state: RwLock::new(RouterState {
                    table: None,
                    options: NavigationOptions::default(),
                    current: None,
                }),
                surface: Mutex::new(surface),
                layouts: Mutex::new(LayoutMounts::default()),
                history,
                sequence: AtomicU64::new(0),
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Replaces the route table wholesale, then resolves the current location.
    pub async fn register(
        &self,
        descriptors: &[RouteDescriptor<S::View>],
        options: NavigationOptions<S::View>,
    ) -> RouterResult<Resolution> {
        options.config.validate()?;
        let build_options = options.config.build_options();

        {
            let mut state = self.shared.state.write();
            state.table = None;
            state.current = None;
            state.options = options;
        }
        self.shared.layouts.lock().clear();

        let table = match build_table(descriptors, &build_options) {
            Ok(table) => table,
            Err(err) => return self.report(err.into()),
        };
        tracing::debug!(
            instances = table.len() as u64,
            prefix = %table.prefix(),
            "routes registered"
        );
        self.shared.state.write().table = Some(Rc::new(table));

        self.resolve_current().await
    }

    /// Pushes `path` (under the configured prefix) and resolves it.
    pub async fn navigate(&self, path: &str) -> RouterResult<Resolution> {
        let location = self.prefixed(path)?;
        self.shared.history.push(&location);
        self.resolve_location(location).await
    }

    /// Like [`navigate`](Self::navigate) but replaces the current entry.
    pub async fn replace(&self, path: &str) -> RouterResult<Resolution> {
        let location = self.prefixed(path)?;
        self.shared.history.replace(&location);
        self.resolve_location(location).await
    }

    /// Re-resolves whatever location the history currently points at.
    pub async fn resolve_current(&self) -> RouterResult<Resolution> {
        let location = self.shared.history.location();
        self.resolve_location(location).await
    }

    #[tracing::instrument(level = "debug", skip(self), fields(sequence))]
    async fn resolve_location(&self, location: String) -> RouterResult<Resolution> {
        let shared = &*self.shared;
        let sequence = shared.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::Span::current().record("sequence", sequence);
        let _in_flight = InFlight::enter(&shared.in_flight);

        let (table, order, discard_stale, before_resolve) = {
            let state = shared.state.read();
            (
                state.table.clone(),
                state.options.config.match_order,
                state.options.config.discard_stale_renders,
                state.options.before_resolve.clone(),
            )
        };

        let Some(table) = table else {
            return self.report(RouterError::EmptyRegistry);
        };
        let Some(found) = matcher::resolve(&*table, &location, order) else {
            return self.report(RouterError::EmptyRegistry);
        };
        let instance = found.instance;

        if let Some(guard) = &before_resolve
            && !guard(instance)
        {
            tracing::warn!(route = %instance.id(), "resolution cancelled by guard");
            return Ok(Resolution::Cancelled {
                route: instance.id(),
            });
        }

        if !found.is_match() {
            shared.state.write().current = None;
            return self.report(RouterError::NoMatch {
                path: found.path.clone(),
            });
        }

        let params = found.params();
        let props = RouteProps {
            route: instance.id(),
            path: found.path.clone(),
            params: params.clone(),
        };
        tracing::debug!(route = %instance.id(), template = %instance.path(), "route matched");

        let mut resolver = OutletResolver::new(&shared.surface, &shared.layouts, &*table);
        if discard_stale {
            resolver = resolver.guard_sequence(&shared.sequence, sequence);
        }

        let mount = match resolver.resolve_mount_point(instance, &props).await? {
            MountPoint::Ready(mount) if !resolver.is_superseded() => mount,
            _ => return Ok(Self::discard(instance.id(), sequence)),
        };
        self.clear_mount(&mount);

        let view = instance.render(props).await?;
        if resolver.is_superseded() {
            return Ok(Self::discard(instance.id(), sequence));
        }

        let root = {
            let mut surface = shared.surface.lock();
            surface.clear(&mount);
            let root = surface.attach(&mount, view);
            shared.layouts.lock().prune(&*surface);
            root
        };
        if instance.is_layout() {
            resolver.record_layout(instance, &root);
        }

        shared.state.write().current = Some(CurrentRoute {
            route: instance.id(),
            path: found.path.clone(),
            params,
            sequence,
        });

        Ok(Resolution::Rendered {
            route: instance.id(),
            sequence,
        })
    }

    fn discard(route: RouteId, sequence: u64) -> Resolution {
        tracing::warn!(
            route = %route,
            sequence,
            "discarding render superseded by a newer navigation"
        );
        Resolution::Stale { route, sequence }
    }

    fn clear_mount(&self, mount: &S::Node) {
        let mut surface = self.shared.surface.lock();
        surface.clear(mount);
        let pruned = self.shared.layouts.lock().prune(&*surface);
        if pruned > 0 {
            tracing::trace!(pruned = pruned as u64, "unmounted layouts dropped");
        }
    }

    fn report(&self, err: RouterError) -> RouterResult<Resolution> {
        let handler = self.shared.state.read().options.on_error.clone();
        match handler {
            Some(handler) if err.is_reportable() => {
                tracing::warn!(error = %err, "navigation error reported");
                handler(&err);
                Ok(Resolution::Reported)
            }
            _ => Err(err),
        }
    }

    fn prefixed(&self, location: &str) -> PathResult<String> {
        let prefix = self.shared.state.read().options.config.normalized_prefix();
        let parts = split_location(location);
        let mut prefixed = apply_prefix(&prefix, parts.path)?;
        if let Some(query) = parts.query {
            prefixed.push('?');
            prefixed.push_str(query);
        }
        Ok(prefixed)
    }

    /// Subscribes to back/forward and link activation. Events are queued and
    /// resolved as the returned [`Listener`] is driven; dropping it
    /// unsubscribes.
    pub fn listen(&self) -> Listener<S, H> {
        let (tx, rx) = futures::channel::mpsc::unbounded();
        let intercept_links = self.shared.state.read().options.config.intercept_links;

        let listener: HistoryListener = Rc::new(move |event: &HistoryEvent| match event {
            HistoryEvent::PopState => {
                let _ = tx.unbounded_send(event.clone());
                false
            }
            HistoryEvent::LinkActivated { href } => {
                if !intercept_links || !is_internal_href(href) {
                    return false;
                }
                tx.unbounded_send(event.clone()).is_ok()
            }
        });

        let subscription = self.shared.history.subscribe(listener);
        Listener::new(self.clone(), rx, subscription)
    }

    pub(crate) async fn handle_event(&self, event: HistoryEvent) -> RouterResult<Resolution> {
        match event {
            HistoryEvent::PopState => self.resolve_current().await,
            HistoryEvent::LinkActivated { href } => {
                let target = if href.starts_with('?') {
                    let current = self.shared.history.location();
                    format!("{}{}", split_location(&current).path, href)
                } else {
                    href
                };
                self.navigate(&target).await
            }
        }
    }

    /// Path placeholders merged with query pairs of the current route.
    pub fn current_params(&self) -> RouteParams {
        self.shared
            .state
            .read()
            .current
            .as_ref()
            .map(|current| current.params.clone())
            .unwrap_or_default()
    }

    pub fn current_route(&self) -> Option<CurrentRoute> {
        self.shared.state.read().current.clone()
    }

    pub fn status(&self) -> RouterStatus {
        if self.shared.in_flight.load(Ordering::Relaxed) > 0 {
            RouterStatus::Resolving
        } else {
            RouterStatus::Idle
        }
    }

    pub fn table(&self) -> Option<Rc<RouteTable<S::View>>> {
        self.shared.state.read().table.clone()
    }

    pub fn history(&self) -> &H {
        &self.shared.history
    }

    pub fn mounted_layouts(&self) -> usize {
        self.shared.layouts.lock().len()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.shared.surface.lock();
        f(&guard)
    }
}

impl<S: Surface, H: History> std::fmt::Debug for Router<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.read();
        f.debug_struct("Router")
            .field("routes", &state.table.as_ref().map(|table| table.len()))
            .field("options", &state.options)
            .field("current", &state.current)
            .field("status", &self.status())
            .finish()
    }
}
