use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyslogConfig {
    /// Collector host name or address, optionally with `:port`.
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Consecutive failed datagrams that abort one export.
    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,
}

impl SyslogConfig {
    pub fn is_enabled(&self) -> bool {
        self.server.is_some()
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            app_name: default_app_name(),
            max_consecutive_failures: default_max_consecutive_failures(),
        }
    }
}

fn default_port() -> u16 {
    514
}

fn default_app_name() -> String {
    "dns-export".to_string()
}

fn default_max_consecutive_failures() -> u32 {
    5
}
