//! Catalog entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use iddsi_core::types::id::FoodId;

use super::category::FoodCategory;
use super::level::{self, IddsiLevel};

/// A food or drink in the IDDSI reference library.
///
/// Stored in the `foods` collection with snake_case field names. The
/// identifier lives on the document, not in its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Store-assigned identifier.
    #[serde(skip)]
    pub id: FoodId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// IDDSI level, absent on legacy entries.
    #[serde(default, deserialize_with = "level::deserialize_optional")]
    pub iddsi_level: Option<IddsiLevel>,
    /// Food or drink.
    #[serde(default)]
    pub category: FoodCategory,
    /// Preparation instructions.
    #[serde(default)]
    pub preparation: String,
    /// Texture notes.
    #[serde(default)]
    pub texture: String,
    /// Serving tips.
    #[serde(default)]
    pub tips: String,
    /// Mean of user ratings, maintained by the mobile app.
    #[serde(default)]
    pub average_rating: f64,
    /// User comments, appended by the mobile app.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Set by the store on creation.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Set by the store on every update.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CatalogEntry {
    /// Number of user comments.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Display label for the level (`"Level 4"`), or `"No level"`.
    pub fn level_label(&self) -> String {
        match self.iddsi_level {
            Some(level) => format!("Level {level}"),
            None => "No level".to_string(),
        }
    }

    /// Names of editable fields whose value differs from `other`.
    pub fn changed_fields(&self, other: &CatalogEntry) -> Vec<String> {
        let mut changed = Vec::new();
        if self.name != other.name {
            changed.push("name".to_string());
        }
        if self.description != other.description {
            changed.push("description".to_string());
        }
        if self.iddsi_level != other.iddsi_level {
            changed.push("iddsi_level".to_string());
        }
        if self.category != other.category {
            changed.push("category".to_string());
        }
        if self.preparation != other.preparation {
            changed.push("preparation".to_string());
        }
        if self.texture != other.texture {
            changed.push("texture".to_string());
        }
        if self.tips != other.tips {
            changed.push("tips".to_string());
        }
        changed
    }
}

/// A user comment on a catalog entry. Read-only for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Display name of the commenter.
    #[serde(default)]
    pub user_name: String,
    /// Commenter email, if shared.
    #[serde(default)]
    pub user_email: Option<String>,
    /// Rating given with the comment.
    #[serde(default)]
    pub rating: f64,
    /// Comment body.
    #[serde(default)]
    pub text: String,
    /// When the comment was posted.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
