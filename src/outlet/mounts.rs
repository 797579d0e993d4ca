use crate::surface::Surface;
use crate::types::RouteId;
use hashbrown::HashMap as FastHashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMount<N> {
    pub root: N,
    pub outlet: N,
}

/// Currently mounted layouts, keyed by layout identifier.
#[derive(Debug)]
pub struct LayoutMounts<N> {
    entries: FastHashMap<RouteId, LayoutMount<N>>,
}

impl<N> Default for LayoutMounts<N> {
    fn default() -> Self {
        Self {
            entries: FastHashMap::new(),
        }
    }
}

impl<N: Clone + PartialEq> LayoutMounts<N> {
    pub fn insert(&mut self, layout: RouteId, root: N, outlet: N) {
        self.entries.insert(layout, LayoutMount { root, outlet });
    }

    pub fn get(&self, layout: RouteId) -> Option<&LayoutMount<N>> {
        self.entries.get(&layout)
    }

    pub fn remove(&mut self, layout: RouteId) -> Option<LayoutMount<N>> {
        self.entries.remove(&layout)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Outlet of `layout` if its root and outlet are both still attached.
    /// A detached entry is dropped.
    pub fn live_outlet<S>(&mut self, layout: RouteId, surface: &S) -> Option<N>
    where
        S: Surface<Node = N>,
    {
        let mount = self.entries.get(&layout)?;
        if surface.is_connected(&mount.root) && surface.is_connected(&mount.outlet) {
            return Some(mount.outlet.clone());
        }
        self.entries.remove(&layout);
        None
    }

    /// Drops every entry whose root is no longer attached. Returns how many
    /// were removed.
    pub fn prune<S>(&mut self, surface: &S) -> usize
    where
        S: Surface<Node = N>,
    {
        let before = self.entries.len();
        self.entries
            .retain(|_, mount| surface.is_connected(&mount.root));
        before - self.entries.len()
    }
}
