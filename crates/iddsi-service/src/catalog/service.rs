//! Food library create, update and delete.

use std::sync::Arc;

use tracing::{info, warn};

use iddsi_core::error::AppError;
use iddsi_core::events::CatalogEvent;
use iddsi_core::result::AppResult;
use iddsi_core::types::id::FoodId;
use iddsi_entity::food::{CatalogEntry, FoodDraft};
use iddsi_entity::notification::ChangeType;
use iddsi_store::repositories::FoodRepository;

use super::delivery::DeliveryHandle;
use crate::events::EventBus;
use crate::notification::ChangeNotifier;

/// A committed catalog mutation.
#[derive(Debug)]
pub struct CatalogMutation {
    /// The entry after the mutation; for deletions, the entry as it was.
    pub entry: CatalogEntry,
    /// The notification fan-out started for this mutation.
    pub delivery: DeliveryHandle,
}

/// Manages the food library.
///
/// Every successful mutation commits first and then dispatches one
/// notification per recipient on a background task. Notification failures
/// never fail the mutation.
#[derive(Clone)]
pub struct CatalogService {
    /// Food repository.
    foods: FoodRepository,
    /// Change notifier, `None` when notifications are disabled.
    notifier: Option<Arc<ChangeNotifier>>,
    /// Domain event bus.
    events: EventBus,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        foods: FoodRepository,
        notifier: Option<Arc<ChangeNotifier>>,
        events: EventBus,
    ) -> Self {
        Self {
            foods,
            notifier,
            events,
        }
    }

    /// Lists every entry in store order.
    pub async fn list(&self) -> AppResult<Vec<CatalogEntry>> {
        self.foods.find_all().await
    }

    /// Gets one entry.
    pub async fn get(&self, id: &FoodId) -> AppResult<CatalogEntry> {
        self.foods
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food '{id}' not found")))
    }

    /// Adds a new entry and notifies every recipient.
    pub async fn add_food(&self, draft: FoodDraft) -> AppResult<CatalogMutation> {
        draft.validate()?;

        let id = self.foods.create(&draft).await?;
        let entry = self.reload(&id, None, &draft).await;

        info!(food_id = %id, name = %entry.name, "Food added");
        self.events.publish(CatalogEvent::Added {
            food_id: id,
            name: entry.name.clone(),
        });

        let delivery = self.dispatch(ChangeType::Added, entry.clone(), None);
        Ok(CatalogMutation { entry, delivery })
    }

    /// Replaces the editable fields of an entry and notifies every recipient.
    pub async fn update_food(&self, id: &FoodId, draft: FoodDraft) -> AppResult<CatalogMutation> {
        draft.validate()?;

        let previous = self.get(id).await?;
        self.foods.update(id, &draft).await?;
        let entry = self.reload(id, Some(&previous), &draft).await;

        let changed_fields = previous.changed_fields(&entry);
        info!(
            food_id = %id,
            name = %entry.name,
            changed = ?changed_fields,
            "Food updated"
        );
        self.events.publish(CatalogEvent::Updated {
            food_id: id.clone(),
            name: entry.name.clone(),
            changed_fields,
        });

        let delivery = self.dispatch(ChangeType::Updated, entry.clone(), Some(previous));
        Ok(CatalogMutation { entry, delivery })
    }

    /// Permanently deletes an entry and notifies every recipient.
    ///
    /// Notifications describe the entry as it was before removal.
    pub async fn delete_food(&self, id: &FoodId) -> AppResult<CatalogMutation> {
        let entry = self.get(id).await?;
        self.foods.delete(id).await?;

        info!(food_id = %id, name = %entry.name, "Food deleted");
        self.events.publish(CatalogEvent::Deleted {
            food_id: id.clone(),
            name: entry.name.clone(),
        });

        let delivery = self.dispatch(ChangeType::Deleted, entry.clone(), None);
        Ok(CatalogMutation { entry, delivery })
    }

    /// Spawn the fan-out for a committed mutation.
    fn dispatch(
        &self,
        change_type: ChangeType,
        entry: CatalogEntry,
        previous: Option<CatalogEntry>,
    ) -> DeliveryHandle {
        let Some(notifier) = self.notifier.clone() else {
            return DeliveryHandle::disabled();
        };
        let events = self.events.clone();

        DeliveryHandle::spawned(tokio::spawn(async move {
            let report = notifier
                .notify_change(change_type, &entry, previous.as_ref())
                .await;
            events.publish(report.to_event());
            report
        }))
    }

    /// Read an entry back after a write.
    ///
    /// The write has already committed, so a failed read falls back to the
    /// draft applied over what was known before.
    async fn reload(
        &self,
        id: &FoodId,
        previous: Option<&CatalogEntry>,
        draft: &FoodDraft,
    ) -> CatalogEntry {
        match self.foods.find_by_id(id).await {
            Ok(Some(entry)) => entry,
            outcome => {
                if let Err(e) = outcome {
                    warn!(food_id = %id, error = %e, "Failed to read back food after write");
                }
                let mut entry = previous.cloned().unwrap_or_else(|| CatalogEntry {
                    id: id.clone(),
                    ..Default::default()
                });
                apply_draft(&mut entry, draft);
                entry
            }
        }
    }
}

fn apply_draft(entry: &mut CatalogEntry, draft: &FoodDraft) {
    entry.name = draft.name.trim().to_string();
    entry.description = draft.description.clone();
    entry.iddsi_level = draft.iddsi_level;
    entry.category = draft.category;
    entry.preparation = draft.preparation.clone();
    entry.texture = draft.texture.clone();
    entry.tips = draft.tips.clone();
}
