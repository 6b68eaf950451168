//! Food library filter.

use iddsi_entity::food::{CatalogEntry, FoodCategory, IddsiLevel};

/// Criteria for narrowing the food library. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodFilter {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    /// Only entries of this category.
    pub category: Option<FoodCategory>,
    /// Only entries at this level.
    pub level: Option<IddsiLevel>,
}

impl FoodFilter {
    /// Whether `entry` satisfies every criterion.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                entry.name.to_lowercase().contains(&term)
                    || entry.description.to_lowercase().contains(&term)
            }
        };
        let category_ok = self.category.is_none_or(|c| entry.category == c);
        let level_ok = self.level.is_none_or(|l| entry.iddsi_level == Some(l));

        search_ok && category_ok && level_ok
    }

    /// Entries satisfying the filter, in their original order.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}
