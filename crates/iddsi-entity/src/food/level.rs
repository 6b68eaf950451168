//! IDDSI texture level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use iddsi_core::AppError;

/// Ordinal IDDSI level, `0` (thin) to `7` (regular).
///
/// Stored as text (`"4"`), matching what the mobile app reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct IddsiLevel(u8);

impl IddsiLevel {
    /// Highest defined level.
    pub const MAX: u8 = 7;

    /// Level preselected in the entry form.
    pub const DEFAULT: IddsiLevel = IddsiLevel(4);

    /// Create a level, rejecting values above [`IddsiLevel::MAX`].
    pub fn new(level: u8) -> Result<Self, AppError> {
        if level > Self::MAX {
            return Err(AppError::validation(format!(
                "Invalid IDDSI level {level}: expected 0-{}",
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    /// Return the numeric level.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for IddsiLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for IddsiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IddsiLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix("Level ")
            .or_else(|| trimmed.strip_prefix("level "))
            .unwrap_or(trimmed);
        let level: u8 = trimmed
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid IDDSI level: '{s}'")))?;
        Self::new(level)
    }
}

impl From<IddsiLevel> for String {
    fn from(level: IddsiLevel) -> Self {
        level.to_string()
    }
}

/// Wire forms a level may take in stored documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Text(String),
    Number(u64),
}

impl LevelRepr {
    fn into_level(self) -> Result<Option<IddsiLevel>, AppError> {
        match self {
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => s.parse().map(Some),
            Self::Number(n) => u8::try_from(n)
                .map_err(|_| AppError::validation(format!("Invalid IDDSI level {n}")))
                .and_then(IddsiLevel::new)
                .map(Some),
        }
    }
}

impl<'de> Deserialize<'de> for IddsiLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        LevelRepr::deserialize(deserializer)?
            .into_level()
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom("empty IDDSI level"))
    }
}

/// Deserialize an optional level, treating `null`, a missing field and an
/// empty string alike as "no level".
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<IddsiLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LevelRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(repr) => repr.into_level().map_err(serde::de::Error::custom),
    }
}
