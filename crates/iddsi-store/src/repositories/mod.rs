//! Typed repositories over a [`DocumentStore`](iddsi_core::traits::DocumentStore).

pub mod food;
pub mod issue;
pub mod notification;
pub mod recipient;

pub use food::FoodRepository;
pub use issue::IssueRepository;
pub use notification::NotificationRepository;
pub use recipient::RecipientRepository;
