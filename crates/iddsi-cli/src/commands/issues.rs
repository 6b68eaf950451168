//! Reported issue CLI commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use iddsi_core::result::AppResult;
use iddsi_entity::issue::ReportedIssue;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the issues command
#[derive(Debug, Args)]
pub struct IssuesArgs {
    /// Show at most this many issues
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Issue display row for table output
#[derive(Debug, Serialize, Tabled)]
struct IssueRow {
    /// Issue ID
    id: String,
    /// Reported at
    reported: String,
    /// Title or question
    title: String,
    /// Reporter name
    user: String,
    /// Reporter email
    email: String,
    /// Issue type
    #[tabled(rename = "type")]
    issue_type: String,
}

impl From<&ReportedIssue> for IssueRow {
    fn from(issue: &ReportedIssue) -> Self {
        Self {
            id: issue.id.to_string(),
            reported: output::format_time(issue.reported_time()),
            title: issue.display_title().to_string(),
            user: issue.display_user().to_string(),
            email: issue.display_email().to_string(),
            issue_type: issue.issue_type.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute the issues command
pub async fn execute(args: &IssuesArgs, ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    let issues = match args.limit {
        Some(limit) => ctx.issues.latest(limit).await?,
        None => ctx.issues.list_recent().await?,
    };
    let rows: Vec<IssueRow> = issues.iter().map(IssueRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
