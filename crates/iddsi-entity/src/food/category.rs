//! Catalog entry category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a catalog entry is eaten or drunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Solid food.
    #[default]
    Food,
    /// Drink / fluid.
    Drink,
}

impl FoodCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drink => "drink",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = iddsi_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "drink" => Ok(Self::Drink),
            _ => Err(iddsi_core::AppError::validation(format!(
                "Invalid category: '{s}'. Expected one of: food, drink"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("food".parse::<FoodCategory>().unwrap(), FoodCategory::Food);
        assert_eq!("DRINK".parse::<FoodCategory>().unwrap(), FoodCategory::Drink);
        assert!("snack".parse::<FoodCategory>().is_err());
    }
}
