//! Food library CRUD with post-commit change notification.

pub mod delivery;
pub mod service;

pub use delivery::DeliveryHandle;
pub use service::{CatalogMutation, CatalogService};
