//! Recipient entity model.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use iddsi_core::types::id::RecipientId;

/// A registered app user. Every recipient receives every catalog notification.
///
/// Documents in `users` are written by the mobile app (camelCase fields);
/// the dashboard only reads the profile fields used for statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Store-assigned identifier.
    #[serde(skip)]
    pub id: RecipientId,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Prescribed food IDDSI level.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub food_level: Option<String>,
    /// Prescribed fluid IDDSI level.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub fluid_level: Option<String>,
    /// Category the user browses by default.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
}

impl Recipient {
    /// Level used for statistics: food level, else fluid level.
    pub fn effective_level(&self) -> Option<&str> {
        self.food_level
            .as_deref()
            .filter(|l| !l.is_empty())
            .or_else(|| self.fluid_level.as_deref().filter(|l| !l.is_empty()))
    }
}

/// Accept strings, numbers and booleans; map `null` and `""` to `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_effective_level_prefers_food_level() {
        let r: Recipient =
            serde_json::from_value(json!({"foodLevel": "5", "fluidLevel": "2"})).unwrap();
        assert_eq!(r.effective_level(), Some("5"));

        let r: Recipient = serde_json::from_value(json!({"fluidLevel": 2})).unwrap();
        assert_eq!(r.effective_level(), Some("2"));

        let r: Recipient = serde_json::from_value(json!({"foodLevel": ""})).unwrap();
        assert_eq!(r.effective_level(), None);
    }
}
