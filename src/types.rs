use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub type RouteParams = HashMap<String, String>;

/// Mount target used when neither the descriptor nor the options name one.
pub const DEFAULT_MOUNT_TARGET: &str = "app";

static NEXT_ROUTE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a route instance. Never reused, including
/// across re-registrations and across router instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(u64);

impl RouteId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ROUTE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route-{}", self.0)
    }
}
