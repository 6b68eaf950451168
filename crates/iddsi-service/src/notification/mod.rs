//! Catalog change notification: message synthesis and per-recipient fan-out.

pub mod formatter;
pub mod notifier;
pub mod report;

pub use formatter::compose_message;
pub use notifier::ChangeNotifier;
pub use report::{DeliveryReport, DeliveryStatus, RecipientDelivery};
