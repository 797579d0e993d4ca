use super::{History, HistoryEvent, HistoryListener, Subscription, is_internal_href};
use parking_lot::Mutex;
use std::rc::Rc;

#[derive(Default)]
struct HistoryInner {
    entries: Vec<String>,
    cursor: usize,
    listeners: Vec<(u64, HistoryListener)>,
    next_listener: u64,
}

/// In-process history stack. Clones share the same stack.
#[derive(Clone)]
pub struct MemoryHistory {
    inner: Rc<Mutex<HistoryInner>>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Rc::new(Mutex::new(HistoryInner {
                entries: vec![initial.to_string()],
                ..HistoryInner::default()
            })),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner.lock().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }

    /// Moves one entry back and notifies listeners. Returns `false` at the
    /// start of the stack.
    pub fn back(&self) -> bool {
        let moved = {
            let mut inner = self.inner.lock();
            if inner.cursor == 0 {
                false
            } else {
                inner.cursor -= 1;
                true
            }
        };
        if moved {
            self.emit(&HistoryEvent::PopState);
        }
        moved
    }

    pub fn forward(&self) -> bool {
        let moved = {
            let mut inner = self.inner.lock();
            if inner.cursor + 1 >= inner.entries.len() {
                false
            } else {
                inner.cursor += 1;
                true
            }
        };
        if moved {
            self.emit(&HistoryEvent::PopState);
        }
        moved
    }

    /// Simulates clicking an anchor. Returns `true` when a listener took over
    /// the navigation; otherwise an internal href is pushed as a plain page
    /// navigation would.
    pub fn activate_link(&self, href: &str) -> bool {
        let prevented = self.emit(&HistoryEvent::LinkActivated {
            href: href.to_string(),
        });
        if !prevented && is_internal_href(href) {
            self.push(href);
        }
        prevented
    }

    fn emit(&self, event: &HistoryEvent) -> bool {
        // Listeners may read the history, so call them without the lock held.
        let listeners: Vec<HistoryListener> = self
            .inner
            .lock()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        let mut prevented = false;
        for listener in listeners {
            prevented |= listener(event);
        }
        prevented
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        let inner = self.inner.lock();
        inner.entries.get(inner.cursor).cloned().unwrap_or_default()
    }

    fn push(&self, location: &str) {
        let mut inner = self.inner.lock();
        let keep = inner.cursor + 1;
        inner.entries.truncate(keep);
        inner.entries.push(location.to_string());
        inner.cursor = inner.entries.len() - 1;
    }

    fn replace(&self, location: &str) {
        let mut inner = self.inner.lock();
        let cursor = inner.cursor;
        match inner.entries.get_mut(cursor) {
            Some(entry) => *entry = location.to_string(),
            None => inner.entries.push(location.to_string()),
        }
    }

    fn subscribe(&self, listener: HistoryListener) -> Subscription {
        let id = {
            let mut inner = self.inner.lock();
            let id = inner.next_listener;
            inner.next_listener += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().listeners.retain(|(existing, _)| *existing != id);
            }
        })
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MemoryHistory")
            .field("entries", &inner.entries)
            .field("cursor", &inner.cursor)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
