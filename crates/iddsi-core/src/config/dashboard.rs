//! Dashboard statistics configuration.

use serde::{Deserialize, Serialize};

/// Dashboard statistics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Foods rated strictly below this value are reported as low-rated.
    #[serde(default = "default_low_rating_threshold")]
    pub low_rating_threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            low_rating_threshold: default_low_rating_threshold(),
        }
    }
}

fn default_low_rating_threshold() -> f64 {
    3.0
}
