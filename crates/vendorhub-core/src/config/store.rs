//! Vendor store backend selection.

use serde::{Deserialize, Serialize};

/// Selects which backend persists vendor records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// `"postgres"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "postgres".to_string()
}
