//! Notification message synthesis.

use iddsi_core::types::id::RecipientId;
use iddsi_entity::food::CatalogEntry;
use iddsi_entity::notification::{ChangeType, Notification};

/// Build the human-readable message for a catalog change.
///
/// The level transition form is used only when both snapshots carry a
/// level and the levels differ.
pub fn compose_message(
    change_type: &ChangeType,
    new_entry: &CatalogEntry,
    old_entry: Option<&CatalogEntry>,
) -> String {
    let name = &new_entry.name;
    match change_type {
        ChangeType::Added => match new_entry.iddsi_level {
            Some(level) => format!("{name} was added to Level {level}"),
            None => format!("{name} was added"),
        },
        ChangeType::Deleted => format!("{name} was deleted"),
        ChangeType::Updated => {
            let old_level = old_entry.and_then(|old| old.iddsi_level);
            match (old_level, new_entry.iddsi_level) {
                (Some(old), Some(new)) if old != new => {
                    format!("{name}'s level was changed from Level {old} to Level {new}")
                }
                _ => format!("{name} was updated"),
            }
        }
        ChangeType::Other(_) => format!("{name} was modified"),
    }
}

/// Build the notification record addressed to one recipient.
pub fn build_notification(
    recipient_id: RecipientId,
    change_type: &ChangeType,
    message: &str,
    new_entry: &CatalogEntry,
    old_entry: Option<&CatalogEntry>,
) -> Notification {
    Notification {
        id: Default::default(),
        recipient_id,
        change_type: change_type.clone(),
        entry_name: new_entry.name.clone(),
        message: message.to_string(),
        iddsi_level: new_entry.iddsi_level,
        previous_iddsi_level: old_entry.and_then(|old| old.iddsi_level),
        category: new_entry.category,
        description: new_entry.description.clone(),
        preparation: new_entry.preparation.clone(),
        texture: new_entry.texture.clone(),
        created_timestamp: None,
        is_read: false,
        entry_id: new_entry.id.clone(),
    }
}
