//! Catalog (food library) domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::FoodId;

/// Events related to catalog mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CatalogEvent {
    /// An entry was created.
    Added {
        /// The new entry.
        food_id: FoodId,
        /// Display name at creation.
        name: String,
    },
    /// An entry's editable fields were replaced.
    Updated {
        /// The entry.
        food_id: FoodId,
        /// Display name after the update.
        name: String,
        /// Fields whose value changed.
        changed_fields: Vec<String>,
    },
    /// An entry was permanently removed.
    Deleted {
        /// The removed entry.
        food_id: FoodId,
        /// Display name before removal.
        name: String,
    },
}
