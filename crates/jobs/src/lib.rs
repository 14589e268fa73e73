pub mod runner;
#[cfg(unix)]
pub mod signal_dump;
pub mod statistics_export;

pub use runner::JobRunner;
#[cfg(unix)]
pub use signal_dump::SignalDumpJob;
pub use statistics_export::StatisticsExportJob;
