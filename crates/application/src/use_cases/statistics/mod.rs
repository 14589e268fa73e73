mod export_statistics;
mod ingest_dns_response;
mod reset_statistics;

pub use export_statistics::ExportStatisticsUseCase;
pub use ingest_dns_response::{IngestDnsResponseUseCase, IngestOutcome};
pub use reset_statistics::ResetStatisticsUseCase;
