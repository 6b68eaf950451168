//! Catalog entry repository.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_core::types::document::{Document, DocumentWrite, Fields};
use iddsi_core::types::id::FoodId;
use iddsi_entity::food::{CatalogEntry, FoodDraft};

use crate::collections::FOODS;

/// Repository for the `foods` collection.
#[derive(Clone)]
pub struct FoodRepository {
    store: Arc<dyn DocumentStore>,
}

impl FoodRepository {
    /// Create a new food repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List every catalog entry.
    pub async fn find_all(&self) -> AppResult<Vec<CatalogEntry>> {
        Ok(self
            .store
            .list_all(FOODS)
            .await?
            .iter()
            .map(decode)
            .collect())
    }

    /// Find an entry by id.
    pub async fn find_by_id(&self, id: &FoodId) -> AppResult<Option<CatalogEntry>> {
        Ok(self.store.get(FOODS, &id.into()).await?.as_ref().map(decode))
    }

    /// Insert a new entry with zero rating and no comments.
    pub async fn create(&self, draft: &FoodDraft) -> AppResult<FoodId> {
        let mut write = editable_fields(draft)?;
        write.fields.insert("average_rating".to_string(), json!(0));
        write.fields.insert("comments".to_string(), json!([]));
        let write = write
            .server_timestamp("created_at")
            .server_timestamp("updated_at");

        Ok(self.store.create(FOODS, write).await?.into())
    }

    /// Replace every editable field of an entry and refresh `updated_at`.
    pub async fn update(&self, id: &FoodId, draft: &FoodDraft) -> AppResult<()> {
        let write = editable_fields(draft)?.server_timestamp("updated_at");
        self.store.update(FOODS, &id.into(), write).await
    }

    /// Permanently delete an entry.
    pub async fn delete(&self, id: &FoodId) -> AppResult<()> {
        self.store.delete(FOODS, &id.into()).await
    }
}

fn editable_fields(draft: &FoodDraft) -> AppResult<DocumentWrite> {
    DocumentWrite::from_value(&json!({
        "name": draft.name.trim(),
        "description": draft.description,
        "iddsi_level": draft.iddsi_level,
        "category": draft.category,
        "preparation": draft.preparation,
        "texture": draft.texture,
        "tips": draft.tips,
    }))
}

/// Decode a food document.
///
/// A document that does not decode as a whole is read field by field, so a
/// single bad value never hides the entry from listing, editing or deletion.
fn decode(doc: &Document) -> CatalogEntry {
    let mut entry = doc.decode::<CatalogEntry>().unwrap_or_else(|e| {
        warn!(id = %doc.id, error = %e, "Malformed food document, unreadable fields dropped");
        salvage(&doc.fields)
    });
    entry.id = doc.id.clone().into();
    entry
}

fn salvage(fields: &Fields) -> CatalogEntry {
    CatalogEntry {
        name: field(fields, "name"),
        description: field(fields, "description"),
        iddsi_level: field(fields, "iddsi_level"),
        category: field(fields, "category"),
        preparation: field(fields, "preparation"),
        texture: field(fields, "texture"),
        tips: field(fields, "tips"),
        average_rating: field(fields, "average_rating"),
        comments: field(fields, "comments"),
        created_at: field(fields, "created_at"),
        updated_at: field(fields, "updated_at"),
        ..Default::default()
    }
}

fn field<T: DeserializeOwned + Default>(fields: &Fields, key: &str) -> T {
    fields
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}
