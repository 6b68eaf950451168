//! Reported issue entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iddsi_core::types::id::IssueId;

use super::timestamp;

/// An issue reported from the mobile app. Read-only for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedIssue {
    /// Store-assigned identifier.
    #[serde(skip)]
    pub id: IssueId,
    /// Reporter display name.
    #[serde(default)]
    pub user_name: Option<String>,
    /// Reporter email.
    #[serde(default)]
    pub user_email: Option<String>,
    /// Issue title.
    #[serde(default)]
    pub title: Option<String>,
    /// Legacy title field used by older app versions.
    #[serde(default)]
    pub question: Option<String>,
    /// Issue details.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form issue classification.
    #[serde(default)]
    pub issue_type: Option<String>,
    /// Primary report time.
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Report time written by some app versions.
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub reported_at: Option<DateTime<Utc>>,
    /// Document creation time.
    #[serde(default, deserialize_with = "timestamp::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReportedIssue {
    /// First present of `timestamp`, `reportedAt`, `createdAt`.
    pub fn reported_time(&self) -> Option<DateTime<Utc>> {
        self.timestamp.or(self.reported_at).or(self.created_at)
    }

    /// Title for display.
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.question))
            .unwrap_or("No title")
    }

    /// Reporter name for display.
    pub fn display_user(&self) -> &str {
        non_empty(&self.user_name).unwrap_or("Anonymous User")
    }

    /// Reporter email for display.
    pub fn display_email(&self) -> &str {
        non_empty(&self.user_email).unwrap_or("No email")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
