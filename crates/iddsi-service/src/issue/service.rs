//! Newest-first listing of user-reported issues.

use std::cmp::Ordering;

use iddsi_core::result::AppResult;
use iddsi_entity::issue::ReportedIssue;
use iddsi_store::repositories::IssueRepository;

/// Read-side service for the `reported_issues` collection.
#[derive(Clone)]
pub struct IssueService {
    issues: IssueRepository,
}

impl IssueService {
    /// Creates a new issue service.
    pub fn new(issues: IssueRepository) -> Self {
        Self { issues }
    }

    /// All reported issues, most recent first.
    ///
    /// Issues with no recorded time sort last, in store order.
    pub async fn list_recent(&self) -> AppResult<Vec<ReportedIssue>> {
        let mut issues = self.issues.find_all().await?;
        issues.sort_by(newest_first);
        Ok(issues)
    }

    /// The `limit` most recent issues.
    pub async fn latest(&self, limit: usize) -> AppResult<Vec<ReportedIssue>> {
        let mut issues = self.list_recent().await?;
        issues.truncate(limit);
        Ok(issues)
    }
}

fn newest_first(a: &ReportedIssue, b: &ReportedIssue) -> Ordering {
    match (a.reported_time(), b.reported_time()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
