//! Reported issue monitoring.

pub mod service;

pub use service::IssueService;
