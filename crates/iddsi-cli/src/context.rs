//! Service wiring for one CLI invocation.

use std::sync::Arc;

use tracing::{debug, info};

use iddsi_core::config::AppConfig;
use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_service::{CatalogService, ChangeNotifier, DashboardService, EventBus, IssueService};
use iddsi_store::MemoryDocumentStore;
use iddsi_store::repositories::{
    FoodRepository, IssueRepository, NotificationRepository, RecipientRepository,
};

/// Everything a command needs, built from configuration.
pub struct AppContext {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Food library CRUD.
    pub catalog: CatalogService,
    /// Dashboard aggregates.
    pub dashboard: DashboardService,
    /// Reported issues.
    pub issues: IssueService,
    /// Registered users.
    pub recipients: RecipientRepository,
    /// Delivered notifications.
    pub notifications: NotificationRepository,
    /// Domain events.
    pub events: EventBus,
    store: MemoryDocumentStore,
}

impl AppContext {
    /// Load the store snapshot and wire every service over it.
    pub async fn open(config: AppConfig) -> AppResult<Self> {
        let store = MemoryDocumentStore::load(&config.store.data_file).await?;
        debug!(data_file = %config.store.data_file, "Document store loaded");
        Ok(Self::with_store(config, store))
    }

    /// Wire every service over an existing store.
    pub fn with_store(config: AppConfig, store: MemoryDocumentStore) -> Self {
        let handle: Arc<dyn DocumentStore> = Arc::new(store.clone());

        let foods = FoodRepository::new(handle.clone());
        let recipients = RecipientRepository::new(handle.clone());
        let notifications = NotificationRepository::new(handle.clone());
        let issues = IssueRepository::new(handle);

        let events = EventBus::new(config.notifier.event_buffer);
        let notifier = config.notifier.enabled.then(|| {
            Arc::new(ChangeNotifier::new(
                recipients.clone(),
                notifications.clone(),
            ))
        });

        Self {
            catalog: CatalogService::new(foods.clone(), notifier, events.clone()),
            dashboard: DashboardService::new(recipients.clone(), foods, issues.clone()),
            issues: IssueService::new(issues),
            recipients,
            notifications,
            events,
            store,
            config,
        }
    }

    /// Write the store snapshot back if autosave is enabled.
    pub async fn persist(&self) -> AppResult<()> {
        if !self.config.store.autosave {
            debug!("Autosave disabled, store not written");
            return Ok(());
        }
        self.store.save(&self.config.store.data_file).await?;
        info!(data_file = %self.config.store.data_file, "Document store saved");
        Ok(())
    }
}
