//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON snapshot backing the in-memory store.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Whether CLI commands write the snapshot back after a mutation.
    #[serde(default = "default_true")]
    pub autosave: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autosave: true,
        }
    }
}

fn default_data_file() -> String {
    "data/iddsi-store.json".to_string()
}

fn default_true() -> bool {
    true
}
