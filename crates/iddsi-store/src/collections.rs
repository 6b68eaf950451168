//! Collection names shared with the mobile app.

/// App users; every document is a notification recipient.
pub const USERS: &str = "users";

/// The IDDSI food and drink library.
pub const FOODS: &str = "foods";

/// Per-recipient catalog change notifications.
pub const NOTIFICATIONS: &str = "notifications";

/// Issues reported from the app.
pub const REPORTED_ISSUES: &str = "reported_issues";
