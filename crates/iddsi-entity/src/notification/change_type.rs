//! Catalog change type carried by notifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of catalog mutation a notification describes.
///
/// Parsing is case-insensitive. Unrecognised values are kept (lower-cased)
/// in [`ChangeType::Other`] rather than rejected, so a fan-out with an
/// unknown type still reaches every recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    /// An entry was created.
    Added,
    /// An entry was edited.
    Updated,
    /// An entry was removed.
    Deleted,
    /// Any other value.
    Other(String),
}

impl ChangeType {
    /// Parse a change type, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "added" => Self::Added,
            "updated" => Self::Updated,
            "deleted" => Self::Deleted,
            _ => Self::Other(lowered),
        }
    }

    /// Return the lower-case wire form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ChangeType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for ChangeType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<ChangeType> for String {
    fn from(change: ChangeType) -> Self {
        change.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ChangeType::parse("ADDED"), ChangeType::Added);
        assert_eq!(ChangeType::parse("Updated"), ChangeType::Updated);
        assert_eq!(ChangeType::parse("deleted"), ChangeType::Deleted);
        assert_eq!(
            ChangeType::parse("Archived"),
            ChangeType::Other("archived".to_string())
        );
    }

    #[test]
    fn test_serde_uses_wire_form() {
        assert_eq!(
            serde_json::to_string(&ChangeType::Updated).unwrap(),
            "\"updated\""
        );
        let parsed: ChangeType = serde_json::from_str("\"Renamed\"").unwrap();
        assert_eq!(parsed.as_str(), "renamed");
    }
}
