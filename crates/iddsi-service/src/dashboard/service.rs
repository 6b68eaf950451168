//! Dashboard headline counts and user/food breakdowns.

use serde::Serialize;

use iddsi_core::result::AppResult;
use iddsi_entity::food::CatalogEntry;
use iddsi_entity::recipient::Recipient;
use iddsi_store::repositories::{FoodRepository, IssueRepository, RecipientRepository};

use super::filter::FoodFilter;

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Registered users.
    pub total_users: usize,
    /// Catalog entries.
    pub total_foods: usize,
    /// Reported issues.
    pub total_issues: usize,
}

/// One bar of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    /// Raw grouping key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Number of users in the group.
    pub count: usize,
}

const UNKNOWN: &str = "Unknown";

/// Read-only aggregates over users, foods and issues.
#[derive(Clone)]
pub struct DashboardService {
    recipients: RecipientRepository,
    foods: FoodRepository,
    issues: IssueRepository,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        recipients: RecipientRepository,
        foods: FoodRepository,
        issues: IssueRepository,
    ) -> Self {
        Self {
            recipients,
            foods,
            issues,
        }
    }

    /// Headline counts.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let (total_users, foods, issues) = tokio::try_join!(
            self.recipients.count(),
            self.foods.find_all(),
            self.issues.find_all(),
        )?;
        Ok(DashboardStats {
            total_users,
            total_foods: foods.len(),
            total_issues: issues.len(),
        })
    }

    /// Users grouped by their food level, falling back to fluid level.
    ///
    /// Numeric levels come first in ascending order; anything else follows
    /// in first-seen order.
    pub async fn users_by_level(&self) -> AppResult<Vec<GroupCount>> {
        let users = self.recipients.find_all().await?;
        let mut groups = group_by(&users, |u| u.effective_level(), |key| format!("Level {key}"));
        groups.sort_by_key(|g| match g.key.parse::<u32>() {
            Ok(n) => (0, n),
            Err(_) => (1, 0),
        });
        Ok(groups)
    }

    /// Users grouped by their selected category, in first-seen order.
    pub async fn users_by_category(&self) -> AppResult<Vec<GroupCount>> {
        let users = self.recipients.find_all().await?;
        Ok(group_by(
            &users,
            |u| u.selected_category.as_deref(),
            capitalize,
        ))
    }

    /// Foods rated strictly below `threshold`, lowest first.
    pub async fn low_rated_foods(&self, threshold: f64) -> AppResult<Vec<CatalogEntry>> {
        let mut foods: Vec<_> = self
            .foods
            .find_all()
            .await?
            .into_iter()
            .filter(|f| f.average_rating < threshold)
            .collect();
        foods.sort_by(|a, b| a.average_rating.total_cmp(&b.average_rating));
        Ok(foods)
    }

    /// Foods matching `filter`, in store order.
    pub async fn search_foods(&self, filter: &FoodFilter) -> AppResult<Vec<CatalogEntry>> {
        Ok(self
            .foods
            .find_all()
            .await?
            .into_iter()
            .filter(|f| filter.matches(f))
            .collect())
    }
}

fn group_by<'a>(
    users: &'a [Recipient],
    key: impl Fn(&'a Recipient) -> Option<&'a str>,
    label: impl Fn(&str) -> String,
) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    for user in users {
        let key = key(user).filter(|k| !k.is_empty()).unwrap_or(UNKNOWN);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount {
                key: key.to_string(),
                label: label(key),
                count: 1,
            }),
        }
    }
    groups
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
