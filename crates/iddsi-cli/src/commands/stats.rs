//! Dashboard statistics CLI command.

use serde::Serialize;
use tabled::Tabled;

use iddsi_core::result::AppResult;
use iddsi_service::dashboard::GroupCount;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Breakdown row for table output
#[derive(Debug, Serialize, Tabled)]
struct GroupRow {
    /// Group label
    group: String,
    /// User count
    users: usize,
}

fn rows(groups: &[GroupCount]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            group: g.label.clone(),
            users: g.count,
        })
        .collect()
}

/// Execute the stats command
pub async fn execute(ctx: &AppContext, format: OutputFormat) -> AppResult<()> {
    let threshold = ctx.config.dashboard.low_rating_threshold;
    let (stats, by_level, by_category, low_rated) = tokio::try_join!(
        ctx.dashboard.stats(),
        ctx.dashboard.users_by_level(),
        ctx.dashboard.users_by_category(),
        ctx.dashboard.low_rated_foods(threshold),
    )?;

    match format {
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "totals": stats,
            "usersByLevel": by_level,
            "usersByCategory": by_category,
            "lowRatedFoods": low_rated.len(),
        })),
        OutputFormat::Table => {
            output::print_heading("Totals");
            output::print_kv("Users", &stats.total_users.to_string());
            output::print_kv("Foods", &stats.total_foods.to_string());
            output::print_kv("Reported issues", &stats.total_issues.to_string());
            output::print_kv(
                &format!("Foods rated below {threshold:.1}"),
                &low_rated.len().to_string(),
            );

            output::print_heading("Users by level");
            output::print_list(&rows(&by_level), format);

            output::print_heading("Users by category");
            output::print_list(&rows(&by_category), format);
        }
    }

    Ok(())
}
