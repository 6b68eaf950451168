//! Shared test helpers for integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use iddsi_core::error::AppError;
use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_core::types::document::{Document, DocumentWrite};
use iddsi_core::types::id::{DocumentId, RecipientId};
use iddsi_entity::recipient::Recipient;
use iddsi_service::{CatalogService, ChangeNotifier, EventBus};
use iddsi_store::MemoryDocumentStore;
use iddsi_store::collections::{NOTIFICATIONS, USERS};
use iddsi_store::repositories::{FoodRepository, NotificationRepository, RecipientRepository};

/// A [`DocumentStore`] wrapper that fails selected operations on demand.
#[derive(Default)]
pub struct FaultyStore {
    /// The real store behind the faults.
    pub inner: MemoryDocumentStore,
    /// Fail every read of the `users` collection.
    pub fail_user_reads: AtomicBool,
    /// Fail notification writes addressed to these recipients.
    pub reject_recipients: Mutex<HashSet<String>>,
    /// Number of notification writes attempted.
    pub notification_writes: AtomicUsize,
}

impl FaultyStore {
    /// Make every `users` read fail with permission denied.
    pub fn deny_user_reads(&self) {
        self.fail_user_reads.store(true, Ordering::SeqCst);
    }

    /// Reject notification writes for `recipient`.
    pub fn reject(&self, recipient: &RecipientId) {
        self.reject_recipients
            .lock()
            .unwrap()
            .insert(recipient.as_str().to_string());
    }
}

#[async_trait]
impl DocumentStore for FaultyStore {
    async fn list_all(&self, collection: &str) -> AppResult<Vec<Document>> {
        if collection == USERS && self.fail_user_reads.load(Ordering::SeqCst) {
            return Err(AppError::permission_denied("Missing or insufficient permissions"));
        }
        self.inner.list_all(collection).await
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        self.inner.get(collection, id).await
    }

    async fn create(&self, collection: &str, write: DocumentWrite) -> AppResult<DocumentId> {
        if collection == NOTIFICATIONS {
            self.notification_writes.fetch_add(1, Ordering::SeqCst);
            let recipient = write
                .fields
                .get("recipientId")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            if self.reject_recipients.lock().unwrap().contains(&recipient) {
                return Err(AppError::store(format!(
                    "Write rejected for recipient '{recipient}'"
                )));
            }
        }
        self.inner.create(collection, write).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        write: DocumentWrite,
    ) -> AppResult<()> {
        self.inner.update(collection, id, write).await
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()> {
        self.inner.delete(collection, id).await
    }
}

/// Test application context
pub struct TestApp {
    /// Store with fault injection
    pub store: Arc<FaultyStore>,
    /// Catalog service under test
    pub catalog: CatalogService,
    /// Notifier under test
    pub notifier: ChangeNotifier,
    /// Registered users
    pub recipients: RecipientRepository,
    /// Written notifications
    pub notifications: NotificationRepository,
    /// Event bus shared by the services
    pub events: EventBus,
}

impl TestApp {
    /// Create a new test application over an empty store
    pub fn new() -> Self {
        let store = Arc::new(FaultyStore::default());
        let handle: Arc<dyn DocumentStore> = store.clone();

        let recipients = RecipientRepository::new(handle.clone());
        let notifications = NotificationRepository::new(handle.clone());
        let notifier = ChangeNotifier::new(recipients.clone(), notifications.clone());
        let events = EventBus::new(64);

        Self {
            catalog: CatalogService::new(
                FoodRepository::new(handle),
                Some(Arc::new(notifier.clone())),
                events.clone(),
            ),
            notifier,
            recipients,
            notifications,
            events,
            store,
        }
    }

    /// Register `n` users and return their ids
    pub async fn register_users(&self, n: usize) -> Vec<RecipientId> {
        let mut ids = Vec::with_capacity(n);
        for i in 0..n {
            let user = Recipient {
                name: Some(format!("User {i}")),
                email: Some(format!("user{i}@example.com")),
                food_level: Some("4".to_string()),
                ..Default::default()
            };
            ids.push(self.recipients.create(&user).await.unwrap());
        }
        ids
    }

    /// Number of documents in the notifications collection
    pub fn notification_count(&self) -> usize {
        self.store.inner.count(NOTIFICATIONS)
    }
}
