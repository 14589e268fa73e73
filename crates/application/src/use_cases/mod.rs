pub mod statistics;

pub use statistics::{
    ExportStatisticsUseCase, IngestDnsResponseUseCase, IngestOutcome, ResetStatisticsUseCase,
};
