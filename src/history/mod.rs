//! Browser history abstraction and the subscription handle used to observe it.

mod memory;
mod subscription;

pub use memory::MemoryHistory;
pub use subscription::Subscription;

use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The user moved through the history stack (back/forward).
    PopState,
    /// An anchor element was activated.
    LinkActivated { href: String },
}

/// Returns `true` to cancel the event's default action.
pub type HistoryListener = Rc<dyn Fn(&HistoryEvent) -> bool>;

pub trait History {
    /// Current location: path plus optional `?query`.
    fn location(&self) -> String;

    fn push(&self, location: &str);

    fn replace(&self, location: &str);

    /// Registers `listener` until the returned subscription is dropped.
    fn subscribe(&self, listener: HistoryListener) -> Subscription;
}

/// Whether an anchor `href` stays inside the document and may be handled by
/// the router instead of a full page load.
pub fn is_internal_href(href: &str) -> bool {
    if href.starts_with("//") {
        return false;
    }
    if href.starts_with('/') || href.starts_with('?') {
        return true;
    }
    false
}
