mod capture;
mod decoder;
mod errors;
mod logging;
mod root;
mod stats;
mod syslog;

pub use capture::CaptureConfig;
pub use decoder::DecoderConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use stats::StatsConfig;
pub use syslog::SyslogConfig;
