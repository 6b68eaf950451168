//! # iddsi-service
//!
//! Business logic for the IDDSI dashboard. Each service orchestrates the
//! typed repositories from `iddsi-store` to implement one use case:
//! catalog change notification, food library CRUD, reported-issue
//! monitoring and dashboard statistics.
//!
//! Services follow constructor injection: the document store handle and
//! every collaborator are provided at construction time.

pub mod catalog;
pub mod dashboard;
pub mod events;
pub mod issue;
pub mod notification;

pub use catalog::{CatalogMutation, CatalogService, DeliveryHandle};
pub use dashboard::{DashboardService, DashboardStats, FoodFilter};
pub use events::EventBus;
pub use issue::IssueService;
pub use notification::{ChangeNotifier, DeliveryReport};
