//! Notification delivery events.

use serde::{Deserialize, Serialize};

use crate::types::id::{FoodId, RecipientId};

/// Outcome of a notification fan-out for one catalog mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotificationEvent {
    /// Every recipient write was attempted.
    DeliveryCompleted {
        /// Entry the notifications describe.
        food_id: Option<FoodId>,
        /// Change type as written into the notifications.
        change_type: String,
        /// Number of notifications written.
        delivered: usize,
        /// Recipients whose write failed.
        failed: Vec<RecipientId>,
    },
    /// The recipient read failed and nothing was written.
    DeliveryAborted {
        /// Entry the notifications would have described.
        food_id: Option<FoodId>,
        /// Change type of the aborted fan-out.
        change_type: String,
        /// Why the fan-out aborted.
        reason: String,
    },
}
