use bytes::Bytes;
use dns_export_application::use_cases::{IngestDnsResponseUseCase, IngestOutcome};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Per-session ingest counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestTally {
    pub accepted: u64,
    pub empty: u64,
    pub rejected: u64,
    pub records: u64,
}

impl IngestTally {
    pub fn record(&mut self, outcome: &IngestOutcome) {
        match outcome {
            IngestOutcome::Accepted { records, .. } => {
                self.accepted += 1;
                self.records += *records as u64;
            }
            IngestOutcome::Empty => self.empty += 1,
            IngestOutcome::Rejected(e) => {
                self.rejected += 1;
                debug!(error = %e, "Payload rejected");
            }
        }
    }

    pub fn log(&self) {
        info!(
            accepted = self.accepted,
            empty = self.empty,
            rejected = self.rejected,
            records = self.records,
            "Ingest summary"
        );
    }
}

/// Feeds every payload from the capture channel into the statistics until the
/// channel closes.
pub async fn drain_payloads(
    ingest: &IngestDnsResponseUseCase,
    payloads: &mut mpsc::Receiver<Bytes>,
) -> IngestTally {
    let mut tally = IngestTally::default();
    while let Some(payload) = payloads.recv().await {
        tally.record(&ingest.execute(&payload).await);
    }
    tally
}
