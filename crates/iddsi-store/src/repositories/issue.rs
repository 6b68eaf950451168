//! Reported issue repository.

use std::sync::Arc;

use tracing::warn;

use iddsi_core::result::AppResult;
use iddsi_core::traits::store::DocumentStore;
use iddsi_entity::issue::ReportedIssue;

use crate::collections::REPORTED_ISSUES;

/// Read-only repository for the `reported_issues` collection.
#[derive(Clone)]
pub struct IssueRepository {
    store: Arc<dyn DocumentStore>,
}

impl IssueRepository {
    /// Create a new issue repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List every reported issue in store order.
    ///
    /// Issues that cannot be decoded are skipped with a warning.
    pub async fn find_all(&self) -> AppResult<Vec<ReportedIssue>> {
        Ok(self
            .store
            .list_all(REPORTED_ISSUES)
            .await?
            .into_iter()
            .filter_map(|doc| match doc.decode::<ReportedIssue>() {
                Ok(mut issue) => {
                    issue.id = doc.id.into();
                    Some(issue)
                }
                Err(e) => {
                    warn!(id = %doc.id, error = %e, "Skipping unreadable reported issue");
                    None
                }
            })
            .collect())
    }
}
