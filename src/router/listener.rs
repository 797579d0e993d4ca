use super::{Resolution, Router, RouterResult};
use crate::history::{History, HistoryEvent, Subscription};
use crate::surface::Surface;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;

/// Queue of history events for one router. Each event becomes one
/// resolution when the listener is driven.
pub struct Listener<S: Surface, H: History> {
    router: Router<S, H>,
    events: UnboundedReceiver<HistoryEvent>,
    subscription: Option<Subscription>,
}

impl<S: Surface, H: History> Listener<S, H> {
    pub(crate) fn new(
        router: Router<S, H>,
        events: UnboundedReceiver<HistoryEvent>,
        subscription: Subscription,
    ) -> Self {
        Self {
            router,
            events,
            subscription: Some(subscription),
        }
    }

    /// Waits for the next event and resolves it. `None` once disposed.
    pub async fn next(&mut self) -> Option<RouterResult<Resolution>> {
        let event = self.events.next().await?;
        tracing::debug!(?event, "history event received");
        Some(self.router.handle_event(event).await)
    }

    /// Resolves every event queued so far, in arrival order.
    pub async fn drain(&mut self) -> Vec<RouterResult<Resolution>> {
        let mut results = Vec::new();
        while let Ok(Some(event)) = self.events.try_next() {
            tracing::debug!(?event, "history event received");
            results.push(self.router.handle_event(event).await);
        }
        results
    }

    /// Drives the listener until it is disposed, stopping at the first error.
    pub async fn run(mut self) -> RouterResult<()> {
        while let Some(result) = self.next().await {
            result?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unsubscribes from the history; queued events are dropped.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        self.events.close();
    }
}

impl<S: Surface, H: History> std::fmt::Debug for Listener<S, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("active", &self.is_active())
            .finish()
    }
}
