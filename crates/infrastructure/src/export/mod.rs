pub mod stdout;
pub mod syslog;

pub use stdout::{render_lines, StdoutExporter};
pub use syslog::SyslogExporter;
