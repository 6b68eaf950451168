//! Per-recipient delivery outcomes of one fan-out.

use iddsi_core::error::AppError;
use iddsi_core::events::NotificationEvent;
use iddsi_core::types::id::{FoodId, NotificationId, RecipientId};
use iddsi_entity::notification::ChangeType;

/// Result of writing one recipient's notification.
#[derive(Debug, Clone)]
pub struct RecipientDelivery {
    /// The recipient.
    pub recipient_id: RecipientId,
    /// The written notification's id, or the write error.
    pub outcome: Result<NotificationId, AppError>,
}

/// How far a fan-out got.
#[derive(Debug, Clone)]
pub enum DeliveryStatus {
    /// Reading the recipients failed; nothing was written.
    Aborted(AppError),
    /// A write was attempted for every recipient.
    Attempted(Vec<RecipientDelivery>),
}

/// Everything a caller may want to know about one `notify_change` call.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    /// Change type written into the notifications.
    pub change_type: ChangeType,
    /// Entry the notifications describe.
    pub entry_id: FoodId,
    /// Entry name at the time of the change.
    pub entry_name: String,
    /// The synthesized message.
    pub message: String,
    /// Fan-out outcome.
    pub status: DeliveryStatus,
}

impl DeliveryReport {
    /// `true` only if the recipient read succeeded and no write failed.
    ///
    /// Zero recipients is a success.
    pub fn is_success(&self) -> bool {
        match &self.status {
            DeliveryStatus::Aborted(_) => false,
            DeliveryStatus::Attempted(deliveries) => deliveries.iter().all(|d| d.outcome.is_ok()),
        }
    }

    /// Per-recipient outcomes; empty when aborted.
    pub fn deliveries(&self) -> &[RecipientDelivery] {
        match &self.status {
            DeliveryStatus::Aborted(_) => &[],
            DeliveryStatus::Attempted(deliveries) => deliveries,
        }
    }

    /// Number of notifications written.
    pub fn delivered_count(&self) -> usize {
        self.deliveries()
            .iter()
            .filter(|d| d.outcome.is_ok())
            .count()
    }

    /// Recipients whose write failed.
    pub fn failed_recipients(&self) -> Vec<&RecipientId> {
        self.deliveries()
            .iter()
            .filter(|d| d.outcome.is_err())
            .map(|d| &d.recipient_id)
            .collect()
    }

    /// The error that aborted the fan-out, if any.
    pub fn abort_reason(&self) -> Option<&AppError> {
        match &self.status {
            DeliveryStatus::Aborted(err) => Some(err),
            DeliveryStatus::Attempted(_) => None,
        }
    }

    /// Convert into the event published on the event bus.
    pub fn to_event(&self) -> NotificationEvent {
        let food_id = Some(self.entry_id.clone()).filter(|id| !id.as_str().is_empty());
        match &self.status {
            DeliveryStatus::Aborted(err) => NotificationEvent::DeliveryAborted {
                food_id,
                change_type: self.change_type.to_string(),
                reason: err.to_string(),
            },
            DeliveryStatus::Attempted(_) => NotificationEvent::DeliveryCompleted {
                food_id,
                change_type: self.change_type.to_string(),
                delivered: self.delivered_count(),
                failed: self.failed_recipients().into_iter().cloned().collect(),
            },
        }
    }
}
