//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iddsi_core::types::id::{FoodId, NotificationId, RecipientId};

use super::change_type::ChangeType;
use crate::food::{FoodCategory, IddsiLevel, level};

/// A catalog-change notification addressed to a single recipient.
///
/// Written once per recipient per mutation into `notifications` and never
/// touched again by the dashboard; the mobile app flips `isRead`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Store-assigned identifier.
    #[serde(skip)]
    pub id: NotificationId,
    /// The recipient user.
    pub recipient_id: RecipientId,
    /// Mutation kind.
    pub change_type: ChangeType,
    /// Entry name at the time of the change.
    pub entry_name: String,
    /// Human-readable summary.
    pub message: String,
    /// Entry level after the change.
    #[serde(default, deserialize_with = "level::deserialize_optional")]
    pub iddsi_level: Option<IddsiLevel>,
    /// Entry level before the change (updates only).
    #[serde(default, deserialize_with = "level::deserialize_optional")]
    pub previous_iddsi_level: Option<IddsiLevel>,
    /// Entry category.
    #[serde(default)]
    pub category: FoodCategory,
    /// Entry description.
    #[serde(default)]
    pub description: String,
    /// Entry preparation instructions.
    #[serde(default)]
    pub preparation: String,
    /// Entry texture notes.
    #[serde(default)]
    pub texture: String,
    /// Set by the store when the notification is written.
    #[serde(default)]
    pub created_timestamp: Option<DateTime<Utc>>,
    /// Whether the recipient has seen the notification.
    #[serde(default)]
    pub is_read: bool,
    /// The entry the notification describes.
    #[serde(default)]
    pub entry_id: FoodId,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
