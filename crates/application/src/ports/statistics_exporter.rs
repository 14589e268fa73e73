use async_trait::async_trait;
use dns_export_domain::{DomainError, StatRecord};

/// Outcome of one export batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub sent: usize,
    /// Positions in the batch that never reached the target: failed sends
    /// plus everything skipped after an abort.
    pub undelivered: Vec<usize>,
    /// Set when the exporter stopped before the end of the batch.
    pub aborted: Option<String>,
}

impl ExportReport {
    /// Every one of `sent` records was delivered.
    pub fn delivered(sent: usize) -> Self {
        Self {
            sent,
            ..Self::default()
        }
    }

    pub fn failed(&self) -> usize {
        self.undelivered.len()
    }
}

/// Sends statistics to a target.
///
/// `Err` means nothing was delivered. Partial delivery, including an abort
/// midway through the batch, is reported through `ExportReport`.
#[async_trait]
pub trait StatisticsExporter: Send + Sync {
    async fn export(&self, records: &[StatRecord]) -> Result<ExportReport, DomainError>;

    /// Human readable destination, used in logs.
    fn target(&self) -> String;
}
