//! In-memory document store backed by `dashmap`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use iddsi_core::error::AppError;
use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_core::types::document::{Document, DocumentWrite, Fields};
use iddsi_core::types::id::DocumentId;

/// A stored document plus its insertion sequence number.
#[derive(Debug, Clone)]
struct StoredDocument {
    seq: u64,
    fields: Fields,
}

/// Thread-safe, clonable in-memory document store.
///
/// Clones share the same data. `list_all` returns documents in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    /// Collection name → (document id → document).
    collections: Arc<DashMap<String, DashMap<DocumentId, StoredDocument>>>,
    /// Monotonic insertion counter.
    next_seq: Arc<AtomicU64>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a caller-chosen identifier, replacing any
    /// existing document with that id. Used when restoring snapshots.
    pub fn insert_raw(&self, collection: &str, document: Document) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(
                document.id,
                StoredDocument {
                    seq,
                    fields: document.fields,
                },
            );
    }

    /// Names of collections holding at least one document.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .collections
            .iter()
            .filter(|c| !c.value().is_empty())
            .map(|c| c.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of documents in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|c| c.len())
            .unwrap_or(0)
    }

    pub(crate) fn documents(&self, collection: &str) -> Vec<Document> {
        let Some(coll) = self.collections.get(collection) else {
            return Vec::new();
        };

        let mut entries: Vec<(u64, Document)> = coll
            .iter()
            .map(|e| {
                (
                    e.value().seq,
                    Document::new(e.key().clone(), e.value().fields.clone()),
                )
            })
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, doc)| doc).collect()
    }
}

/// Apply server timestamps to a field map.
fn stamp(fields: &mut Fields, server_timestamps: &[String]) {
    if server_timestamps.is_empty() {
        return;
    }
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    for field in server_timestamps {
        fields.insert(field.clone(), Value::String(now.clone()));
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        Ok(self.documents(collection))
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        let Some(coll) = self.collections.get(collection) else {
            return Ok(None);
        };
        let found = coll
            .get(id)
            .map(|stored| Document::new(id.clone(), stored.fields.clone()));
        Ok(found)
    }

    async fn create(&self, collection: &str, write: DocumentWrite) -> AppResult<DocumentId> {
        let DocumentWrite {
            mut fields,
            server_timestamps,
        } = write;
        stamp(&mut fields, &server_timestamps);

        let id = DocumentId::generate();
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), StoredDocument { seq, fields });

        debug!(collection, id = %id, "Created document");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        write: DocumentWrite,
    ) -> AppResult<()> {
        let DocumentWrite {
            mut fields,
            server_timestamps,
        } = write;
        stamp(&mut fields, &server_timestamps);

        let coll = self
            .collections
            .get(collection)
            .ok_or_else(|| AppError::not_found(format!("No document '{id}' in '{collection}'")))?;
        let mut stored = coll
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("No document '{id}' in '{collection}'")))?;

        for (key, value) in fields {
            stored.fields.insert(key, value);
        }

        debug!(collection, id = %id, "Updated document");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()> {
        if let Some(coll) = self.collections.get(collection) {
            coll.remove(id);
        }
        debug!(collection, id = %id, "Deleted document");
        Ok(())
    }
}
