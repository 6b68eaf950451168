//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod dashboard;
pub mod logging;
pub mod notifier;
pub mod store;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dashboard::DashboardConfig;
use self::logging::LoggingConfig;
use self::notifier::NotifierConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Every section is optional in the source files; absent sections take
/// their serde defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Change notifier settings.
    #[serde(default)]
    pub notifier: NotifierConfig,
    /// Dashboard statistics settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the given file with an environment-specific overlay
    /// (`config/{env}.toml`, where `env` comes from `IDDSI_ENV`) and
    /// environment variables prefixed with `IDDSI__`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let env = std::env::var("IDDSI_ENV").unwrap_or_else(|_| "development".to_string());
        let overlay = path
            .parent()
            .unwrap_or_else(|| Path::new("config"))
            .join(&env);

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::File::from(overlay).required(false))
            .add_source(
                config::Environment::with_prefix("IDDSI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.store.data_file, "data/iddsi-store.json");
        assert!(config.store.autosave);
        assert!(config.notifier.enabled);
        assert_eq!(config.notifier.event_buffer, 256);
        assert_eq!(config.dashboard.low_rating_threshold, 3.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_override() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            data_file = "/tmp/foods.json"

            [notifier]
            enabled = false

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.data_file, "/tmp/foods.json");
        assert!(config.store.autosave);
        assert!(!config.notifier.enabled);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_applies_environment_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("default.toml");
        std::fs::write(
            &base,
            "[notifier]\nevent_buffer = 64\n\n[dashboard]\nlow_rating_threshold = 2.5\n",
        )
        .unwrap();
        let env = std::env::var("IDDSI_ENV").unwrap_or_else(|_| "development".to_string());
        std::fs::write(
            dir.path().join(format!("{env}.toml")),
            "[dashboard]\nlow_rating_threshold = 4.0\n",
        )
        .unwrap();

        let config = AppConfig::load(&base).unwrap();

        assert_eq!(config.notifier.event_buffer, 64);
        assert_eq!(config.dashboard.low_rating_threshold, 4.0);
        assert!(config.notifier.enabled);
    }

    #[test]
    fn test_load_reads_environment_variables() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("default.toml");
        std::fs::write(&base, "[store]\ndata_file = \"from-file.json\"\n").unwrap();

        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var("IDDSI__STORE__DATA_FILE", "/tmp/from-env.json") };
        let config = AppConfig::load(&base);
        unsafe { std::env::remove_var("IDDSI__STORE__DATA_FILE") };

        assert_eq!(config.unwrap().store.data_file, "/tmp/from-env.json");
    }

    #[test]
    fn test_malformed_value_is_configuration_error() {
        let err = AppConfig::from_toml("[notifier]\nevent_buffer = \"lots\"").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
