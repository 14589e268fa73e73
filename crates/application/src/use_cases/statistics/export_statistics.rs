use crate::ports::{ExportReport, StatisticsExporter, StatisticsStore};
use dns_export_domain::{DomainError, StatRecord};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: hand the current statistics to an exporter
///
/// With `reset_on_export` the table is drained first. Whatever the exporter
/// did not deliver is put back, so counts are neither lost nor sent twice.
pub struct ExportStatisticsUseCase {
    store: Arc<dyn StatisticsStore>,
    exporter: Arc<dyn StatisticsExporter>,
    reset_on_export: bool,
}

impl ExportStatisticsUseCase {
    pub fn new(store: Arc<dyn StatisticsStore>, exporter: Arc<dyn StatisticsExporter>) -> Self {
        Self {
            store,
            exporter,
            reset_on_export: false,
        }
    }

    pub fn with_reset_on_export(mut self, reset: bool) -> Self {
        self.reset_on_export = reset;
        self
    }

    pub async fn execute(&self) -> Result<ExportReport, DomainError> {
        let records = if self.reset_on_export {
            self.store.drain().await
        } else {
            self.store.snapshot().await
        };

        if records.is_empty() {
            debug!(target_name = %self.exporter.target(), "No statistics to export");
            return Ok(ExportReport::default());
        }

        let report = match self.exporter.export(&records).await {
            Ok(report) => report,
            Err(e) => {
                if self.reset_on_export {
                    warn!(error = %e, entries = records.len(), "Export failed, restoring drained statistics");
                    self.store.restore(records).await;
                }
                return Err(e);
            }
        };

        if self.reset_on_export && !report.undelivered.is_empty() {
            let pending = undelivered_records(&records, &report.undelivered);
            warn!(entries = pending.len(), "Restoring undelivered statistics");
            self.store.restore(pending).await;
        }

        if let Some(reason) = &report.aborted {
            return Err(DomainError::ExportFailed {
                target: self.exporter.target(),
                reason: format!("{reason} after {} sent", report.sent),
            });
        }

        info!(
            target_name = %self.exporter.target(),
            sent = report.sent,
            failed = report.failed(),
            "Statistics exported"
        );
        Ok(report)
    }
}

fn undelivered_records(records: &[StatRecord], positions: &[usize]) -> Vec<StatRecord> {
    positions
        .iter()
        .filter_map(|&i| records.get(i).cloned())
        .collect()
}
