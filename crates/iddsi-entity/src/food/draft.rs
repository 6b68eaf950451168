//! Operator-supplied catalog entry fields.

use serde::{Deserialize, Serialize};

use iddsi_core::AppError;

use super::category::FoodCategory;
use super::level::{self, IddsiLevel};

/// The editable fields of a catalog entry, as entered by an operator.
///
/// Defaults mirror the entry form: level 4, category food, empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    /// Display name (required).
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// IDDSI level.
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
}

impl FoodDraft {
    /// Create a draft with form defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            iddsi_level: Some(IddsiLevel::DEFAULT),
            category: FoodCategory::Food,
            preparation: String::new(),
            texture: String::new(),
            tips: String::new(),
        }
    }

    /// Set the level.
    pub fn level(mut self, level: Option<IddsiLevel>) -> Self {
        self.iddsi_level = level;
        self
    }

    /// Set the category.
    pub fn category(mut self, category: FoodCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the draft before it is written.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Food name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_entry_form() {
        let draft = FoodDraft::new("Thickened Water");
        assert_eq!(draft.iddsi_level, Some(IddsiLevel::DEFAULT));
        assert_eq!(draft.category, FoodCategory::Food);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(FoodDraft::new("   ").validate().is_err());
    }

    #[test]
    fn test_level_decodes_like_catalog_entry() {
        let draft: FoodDraft =
            serde_json::from_str(r#"{"name": "Jelly", "iddsi_level": 4}"#).unwrap();
        assert_eq!(draft.iddsi_level, Some(IddsiLevel::DEFAULT));

        let draft: FoodDraft =
            serde_json::from_str(r#"{"name": "Jelly", "iddsi_level": ""}"#).unwrap();
        assert_eq!(draft.iddsi_level, None);

        assert!(serde_json::from_str::<FoodDraft>(r#"{"name": "Jelly", "iddsi_level": "9"}"#).is_err());
    }
}
