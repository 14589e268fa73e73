mod dns_response_decoder;
mod statistics_exporter;
mod statistics_store;

pub use dns_response_decoder::DnsResponseDecoder;
pub use statistics_exporter::{ExportReport, StatisticsExporter};
pub use statistics_store::StatisticsStore;
