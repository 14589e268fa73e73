use dns_export_application::ports::{StatisticsExporter, StatisticsStore};
use dns_export_application::use_cases::{
    ExportStatisticsUseCase, IngestDnsResponseUseCase, ResetStatisticsUseCase,
};
use dns_export_domain::Config;
use dns_export_infrastructure::dns::WireResponseDecoder;
use dns_export_infrastructure::export::{StdoutExporter, SyslogExporter};
use dns_export_infrastructure::stats::InMemoryStatisticsStore;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub ingest: Arc<IngestDnsResponseUseCase>,
    /// Export to the configured target (syslog, or stdout without a server).
    pub export: Arc<ExportStatisticsUseCase>,
    /// Non-destructive stdout dump, used on SIGUSR1.
    pub dump: Arc<ExportStatisticsUseCase>,
    pub reset: Arc<ResetStatisticsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let store: Arc<dyn StatisticsStore> = Arc::new(InMemoryStatisticsStore::new());
        let decoder = Arc::new(WireResponseDecoder::new(config.decoder.include_unknown));
        let stdout: Arc<dyn StatisticsExporter> = Arc::new(StdoutExporter::new());

        let exporter: Arc<dyn StatisticsExporter> = match SyslogExporter::from_config(&config.syslog)
        {
            Some(syslog) => Arc::new(syslog),
            None => stdout.clone(),
        };
        info!(target_name = %exporter.target(), "Statistics exporter configured");

        Self {
            ingest: Arc::new(IngestDnsResponseUseCase::new(decoder, store.clone())),
            export: Arc::new(
                ExportStatisticsUseCase::new(store.clone(), exporter)
                    .with_reset_on_export(config.stats.reset_on_export),
            ),
            dump: Arc::new(ExportStatisticsUseCase::new(store.clone(), stdout)),
            reset: Arc::new(ResetStatisticsUseCase::new(store)),
        }
    }
}
