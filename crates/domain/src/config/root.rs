use serde::{Deserialize, Serialize};

use super::capture::CaptureConfig;
use super::decoder::DecoderConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::stats::StatsConfig;
use super::syslog::SyslogConfig;

const LOCAL_CONFIG_PATH: &str = "dns-export.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-export/config.toml";

/// Main configuration structure for dns-export
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Packet source (capture file or interface)
    #[serde(default)]
    pub capture: CaptureConfig,

    /// Wire decoder behaviour
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Remote syslog collector
    #[serde(default)]
    pub syslog: SyslogConfig,

    /// Statistics export schedule
    #[serde(default)]
    pub stats: StatsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-export.toml in current directory
    /// 3. /etc/dns-export/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        // a source given on the command line replaces the file's source;
        // both at once is left for validate() to reject
        match (overrides.pcap_file, overrides.interface) {
            (Some(file), Some(interface)) => {
                self.capture.pcap_file = Some(file);
                self.capture.interface = Some(interface);
            }
            (Some(file), None) => {
                self.capture.pcap_file = Some(file);
                self.capture.interface = None;
            }
            (None, Some(interface)) => {
                self.capture.interface = Some(interface);
                self.capture.pcap_file = None;
            }
            (None, None) => {}
        }
        if let Some(server) = overrides.syslog_server {
            self.syslog.server = Some(server);
        }
        if let Some(secs) = overrides.export_interval_secs {
            self.stats.export_interval_secs = secs;
        }
        if overrides.include_unknown {
            self.decoder.include_unknown = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.capture.pcap_file, &self.capture.interface) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Validation(
                    "Capture file and interface are mutually exclusive".to_string(),
                ));
            }
            (None, None) => {
                return Err(ConfigError::Validation(
                    "Either a capture file or an interface is required".to_string(),
                ));
            }
            _ => {}
        }

        if self.stats.export_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Export interval must be a positive number of seconds".to_string(),
            ));
        }

        if self.capture.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "Capture channel capacity cannot be 0".to_string(),
            ));
        }

        if self.syslog.app_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Syslog application name cannot be empty".to_string(),
            ));
        }

        if matches!(&self.syslog.server, Some(server) if server.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Syslog server address cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pcap_file: Option<String>,
    pub interface: Option<String>,
    pub syslog_server: Option<String>,
    pub export_interval_secs: Option<u64>,
    pub include_unknown: bool,
    pub log_level: Option<String>,
}
