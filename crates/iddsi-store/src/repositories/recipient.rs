//! Recipient (app user) repository.

use std::sync::Arc;

use tracing::warn;

use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_core::types::document::DocumentWrite;
use iddsi_core::types::id::RecipientId;
use iddsi_entity::recipient::Recipient;

use crate::collections::USERS;

/// Repository for the `users` collection.
#[derive(Clone)]
pub struct RecipientRepository {
    store: Arc<dyn DocumentStore>,
}

impl RecipientRepository {
    /// Create a new recipient repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read every user document.
    ///
    /// A document whose profile fields cannot be decoded is still returned
    /// (with empty profile) so that it remains a delivery target.
    pub async fn find_all(&self) -> AppResult<Vec<Recipient>> {
        let docs = self.store.list_all(USERS).await?;
        let recipients = docs
            .into_iter()
            .map(|doc| {
                let mut recipient = doc.decode::<Recipient>().unwrap_or_else(|e| {
                    warn!(id = %doc.id, error = %e, "Unreadable user profile");
                    Recipient::default()
                });
                recipient.id = doc.id.into();
                recipient
            })
            .collect();
        Ok(recipients)
    }

    /// Register a user. Normally done by the mobile app.
    pub async fn create(&self, recipient: &Recipient) -> AppResult<RecipientId> {
        let write = DocumentWrite::from_value(recipient)?.server_timestamp("createdAt");
        Ok(self.store.create(USERS, write).await?.into())
    }

    /// Count registered users.
    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.store.list_all(USERS).await?.len())
    }
}
