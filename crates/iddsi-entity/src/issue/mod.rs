//! User-reported issue entities.

pub mod model;
pub mod timestamp;

pub use model::ReportedIssue;
