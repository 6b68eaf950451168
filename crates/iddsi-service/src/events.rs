//! In-process event bus for domain events.

use tokio::sync::broadcast;
use tracing::trace;

use iddsi_core::events::DomainEvent;

/// Broadcast channel carrying [`DomainEvent`]s to any number of observers.
///
/// Publishing never blocks and never fails; events published while nobody
/// is subscribed are dropped, and slow subscribers observe `Lagged`.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus retaining at most `buffer` undelivered events per subscriber.
    pub fn new(buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer.max(1));
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: impl Into<DomainEvent>) {
        let event = event.into();
        if self.sender.send(event).is_err() {
            trace!("Domain event dropped, no subscribers");
        }
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iddsi_core::events::{CatalogEvent, EventPayload};
    use iddsi_core::types::id::FoodId;

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        bus.publish(CatalogEvent::Added {
            food_id: FoodId::new("f1"),
            name: "Jelly".to_string(),
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::Catalog(CatalogEvent::Added { .. })
        ));
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus = EventBus::new(1);
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(CatalogEvent::Deleted {
            food_id: FoodId::new("f1"),
            name: "Jelly".to_string(),
        });
    }
}
