//! Domain events emitted by catalog mutations and notification fan-outs.
//!
//! Events are published on the service-layer event bus and consumed by
//! whoever needs to observe delivery outcomes (logging sinks, the CLI,
//! tests).

pub mod catalog;
pub mod notification;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use catalog::CatalogEvent;
pub use notification::NotificationEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A catalog mutation was committed.
    Catalog(CatalogEvent),
    /// A notification fan-out finished.
    Notification(NotificationEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }
}

impl From<CatalogEvent> for DomainEvent {
    fn from(event: CatalogEvent) -> Self {
        Self::new(EventPayload::Catalog(event))
    }
}

impl From<NotificationEvent> for DomainEvent {
    fn from(event: NotificationEvent) -> Self {
        Self::new(EventPayload::Notification(event))
    }
}
