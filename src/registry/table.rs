use super::{RegistryStats, RouteInstance};
use crate::types::RouteId;
use hashbrown::HashMap as FastHashMap;

/// Ordered mapping from identifier to instance. Order is registration
/// (pre-order) order and drives first-registered-wins matching.
pub struct RouteTable<V> {
    instances: Vec<RouteInstance<V>>,
    index: FastHashMap<RouteId, usize>,
    prefix: String,
    stats: RegistryStats,
}

impl<V> RouteTable<V> {
    pub(crate) fn new(prefix: String) -> Self {
        Self {
            instances: Vec::new(),
            index: FastHashMap::new(),
            prefix,
            stats: RegistryStats::default(),
        }
    }

    pub(crate) fn push(&mut self, instance: RouteInstance<V>) {
        self.stats.record_instance(instance.is_layout, instance.depth);
        self.index.insert(instance.id, self.instances.len());
        self.instances.push(instance);
    }

    pub(crate) fn stats_mut(&mut self) -> &mut RegistryStats {
        &mut self.stats
    }

    pub fn get(&self, id: RouteId) -> Option<&RouteInstance<V>> {
        self.index.get(&id).map(|&idx| &self.instances[idx])
    }

    pub fn first(&self) -> Option<&RouteInstance<V>> {
        self.instances.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteInstance<V>> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn stats(&self) -> &RegistryStats {
        &self.stats
    }

    /// First instance registered under exactly this absolute template.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteInstance<V>> {
        self.instances.iter().find(|instance| instance.path == path)
    }

    /// Walks `parent_layout` links from `id` outwards, nearest first.
    pub fn ancestors(&self, id: RouteId) -> Vec<&RouteInstance<V>> {
        let mut chain = Vec::new();
        let mut cursor = self.get(id).and_then(|instance| instance.parent_layout);
        while let Some(parent_id) = cursor {
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            chain.push(parent);
            cursor = parent.parent_layout;
        }
        chain
    }
}

impl<V> std::fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("prefix", &self.prefix)
            .field("instances", &self.instances)
            .finish()
    }
}
