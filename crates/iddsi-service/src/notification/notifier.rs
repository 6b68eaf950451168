//! The change notifier: one notification per recipient per catalog mutation.

use futures::future::join_all;
use tracing::{error, info};

use iddsi_entity::food::CatalogEntry;
use iddsi_entity::notification::ChangeType;
use iddsi_store::repositories::{NotificationRepository, RecipientRepository};

use super::formatter::{build_notification, compose_message};
use super::report::{DeliveryReport, DeliveryStatus, RecipientDelivery};

/// Fans a catalog change out to every registered recipient.
///
/// There is no subscription model: every document in `users` receives
/// every notification. Writes are issued concurrently and are not retried;
/// a failed write never rolls back the ones that succeeded.
#[derive(Clone)]
pub struct ChangeNotifier {
    /// Source of delivery targets.
    recipients: RecipientRepository,
    /// Sink for notification records.
    notifications: NotificationRepository,
}

impl ChangeNotifier {
    /// Creates a new notifier.
    pub fn new(recipients: RecipientRepository, notifications: NotificationRepository) -> Self {
        Self {
            recipients,
            notifications,
        }
    }

    /// Notify every current recipient about a catalog change.
    ///
    /// `new_entry` is the post-mutation snapshot (for deletions, the entry as
    /// it was before removal); `old_entry` is only meaningful for updates.
    /// Errors are logged and folded into the report, never returned.
    pub async fn notify_change(
        &self,
        change_type: impl Into<ChangeType>,
        new_entry: &CatalogEntry,
        old_entry: Option<&CatalogEntry>,
    ) -> DeliveryReport {
        let change_type = change_type.into();
        let message = compose_message(&change_type, new_entry, old_entry);

        let status = match self.recipients.find_all().await {
            Err(e) => {
                error!(
                    change_type = %change_type,
                    entry_id = %new_entry.id,
                    error = %e,
                    "Failed to read recipients, no notifications sent"
                );
                DeliveryStatus::Aborted(e)
            }
            Ok(recipients) => {
                let writes = recipients.into_iter().map(|recipient| {
                    let notification = build_notification(
                        recipient.id,
                        &change_type,
                        &message,
                        new_entry,
                        old_entry,
                    );
                    async move {
                        let outcome = self.notifications.create(&notification).await;
                        if let Err(e) = &outcome {
                            error!(
                                recipient_id = %notification.recipient_id,
                                entry_id = %notification.entry_id,
                                error = %e,
                                "Failed to write notification"
                            );
                        }
                        RecipientDelivery {
                            recipient_id: notification.recipient_id,
                            outcome,
                        }
                    }
                });
                DeliveryStatus::Attempted(join_all(writes).await)
            }
        };

        let report = DeliveryReport {
            change_type,
            entry_id: new_entry.id.clone(),
            entry_name: new_entry.name.clone(),
            message,
            status,
        };

        if let DeliveryStatus::Attempted(deliveries) = &report.status {
            info!(
                change_type = %report.change_type,
                entry_id = %report.entry_id,
                recipients = deliveries.len(),
                delivered = report.delivered_count(),
                failed = deliveries.len() - report.delivered_count(),
                "Catalog change notification fan-out finished"
            );
        }

        report
    }
}
