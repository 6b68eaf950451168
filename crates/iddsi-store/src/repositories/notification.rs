//! Notification repository.

use std::sync::Arc;

use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_core::types::document::{Document, DocumentWrite};
use iddsi_core::types::id::{NotificationId, RecipientId};
use iddsi_entity::notification::Notification;

use crate::collections::NOTIFICATIONS;

/// Repository for the `notifications` collection.
///
/// The dashboard only writes notifications; the read methods exist for
/// operators inspecting what was sent.
#[derive(Clone)]
pub struct NotificationRepository {
    store: Arc<dyn DocumentStore>,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Write one notification; `createdTimestamp` is stamped by the store.
    pub async fn create(&self, notification: &Notification) -> AppResult<NotificationId> {
        let write =
            DocumentWrite::from_value(notification)?.server_timestamp("createdTimestamp");
        Ok(self.store.create(NOTIFICATIONS, write).await?.into())
    }

    /// List every notification.
    pub async fn find_all(&self) -> AppResult<Vec<Notification>> {
        self.store
            .list_all(NOTIFICATIONS)
            .await?
            .iter()
            .map(decode)
            .collect()
    }

    /// List the notifications addressed to one recipient.
    pub async fn find_by_recipient(&self, recipient: &RecipientId) -> AppResult<Vec<Notification>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|n| &n.recipient_id == recipient)
            .collect())
    }
}

fn decode(doc: &Document) -> AppResult<Notification> {
    let mut notification: Notification = doc.decode()?;
    notification.id = doc.id.clone().into();
    Ok(notification)
}
