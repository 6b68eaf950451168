//! Change notifier configuration.

use serde::{Deserialize, Serialize};

/// Settings for catalog change notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Whether catalog mutations fan out notifications at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Capacity of the broadcast channel carrying delivery events.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            event_buffer: default_event_buffer(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_event_buffer() -> usize {
    256
}
