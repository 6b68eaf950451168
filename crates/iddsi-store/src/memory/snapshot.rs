//! JSON snapshot persistence for [`MemoryDocumentStore`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use iddsi_core::error::{AppError, ErrorKind};
use iddsi_core::result::AppResult;
use iddsi_core::types::document::Document;

use super::store::MemoryDocumentStore;

/// On-disk form of a store: collection name → documents in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Documents per collection.
    pub collections: BTreeMap<String, Vec<Document>>,
}

impl Snapshot {
    /// Capture the current contents of a store.
    pub fn capture(store: &MemoryDocumentStore) -> Self {
        let collections = store
            .collection_names()
            .into_iter()
            .map(|name| {
                let docs = store.documents(&name);
                (name, docs)
            })
            .collect();
        Self { collections }
    }

    /// Build a store holding this snapshot's documents.
    pub fn restore(self) -> MemoryDocumentStore {
        let store = MemoryDocumentStore::new();
        for (collection, docs) in self.collections {
            for doc in docs {
                store.insert_raw(&collection, doc);
            }
        }
        store
    }
}

impl MemoryDocumentStore {
    /// Load a store from a snapshot file. A missing file yields an empty store.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await? {
            info!(path = %path.display(), "No snapshot found, starting with an empty store");
            return Ok(Self::new());
        }

        let raw = tokio::fs::read(path).await?;
        let snapshot: Snapshot = serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Corrupt snapshot '{}': {e}", path.display()),
                e,
            )
        })?;

        let store = snapshot.restore();
        info!(
            path = %path.display(),
            collections = store.collection_names().len(),
            "Loaded store snapshot"
        );
        Ok(store)
    }

    /// Write the store to a snapshot file, replacing it atomically.
    pub async fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(&Snapshot::capture(self))?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, path).await?;

        info!(path = %path.display(), "Saved store snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iddsi_core::traits::store::DocumentStore;
    use iddsi_core::types::document::DocumentWrite;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = MemoryDocumentStore::new();
        let first = store
            .create(
                "foods",
                DocumentWrite::from_value(&json!({"name": "Custard"})).unwrap(),
            )
            .await
            .unwrap();
        store
            .create(
                "foods",
                DocumentWrite::from_value(&json!({"name": "Yoghurt"})).unwrap(),
            )
            .await
            .unwrap();
        store.save(&path).await.unwrap();

        let loaded = MemoryDocumentStore::load(&path).await.unwrap();
        let docs = loaded.list_all("foods").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, first);
        assert_eq!(docs[1].fields["name"], "Yoghurt");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = MemoryDocumentStore::load(dir.path().join("absent.json"))
            .await
            .unwrap();
        assert!(store.collection_names().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = MemoryDocumentStore::load(&path).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
