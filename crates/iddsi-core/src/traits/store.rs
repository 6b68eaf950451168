//! Generic document-collection store.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::document::{Document, DocumentWrite};
use crate::types::id::DocumentId;

/// A collection-oriented document store.
///
/// Implementations own identifier assignment and the commit clock used for
/// server timestamps. Callers receive the store as an explicit handle
/// (usually `Arc<dyn DocumentStore>`); nothing in the workspace keeps a
/// process-wide client.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Read every document of a collection, unfiltered and unpaginated.
    async fn list_all(&self, collection: &str) -> AppResult<Vec<Document>>;

    /// Read a single document, `None` if it does not exist.
    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>>;

    /// Insert a document and return the identifier assigned to it.
    async fn create(&self, collection: &str, write: DocumentWrite) -> AppResult<DocumentId>;

    /// Merge fields into an existing document.
    ///
    /// Fails with `NotFound` when the document does not exist.
    async fn update(&self, collection: &str, id: &DocumentId, write: DocumentWrite)
    -> AppResult<()>;

    /// Permanently remove a document. Removing a missing document is not an error.
    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()>;
}
