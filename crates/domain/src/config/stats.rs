use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    /// Seconds between two periodic exports in live mode.
    #[serde(default = "default_export_interval_secs")]
    pub export_interval_secs: u64,

    /// Clear the table after every successful export.
    #[serde(default)]
    pub reset_on_export: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            export_interval_secs: default_export_interval_secs(),
            reset_on_export: false,
        }
    }
}

fn default_export_interval_secs() -> u64 {
    60
}
