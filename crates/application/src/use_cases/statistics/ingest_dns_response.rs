use crate::ports::{DnsResponseDecoder, StatisticsStore};
use dns_export_domain::DecodeError;
use std::sync::Arc;
use tracing::trace;

/// What happened to one captured payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Decoded; `records` answers were counted, `new_entries` of them were first seen.
    Accepted { records: usize, new_entries: usize },
    /// A well-formed response that carried nothing to count.
    Empty,
    /// Not a usable DNS response; nothing reached the statistics.
    Rejected(DecodeError),
}

/// Use case: decode one DNS payload and fold its answers into the statistics
pub struct IngestDnsResponseUseCase {
    decoder: Arc<dyn DnsResponseDecoder>,
    store: Arc<dyn StatisticsStore>,
}

impl IngestDnsResponseUseCase {
    pub fn new(decoder: Arc<dyn DnsResponseDecoder>, store: Arc<dyn StatisticsStore>) -> Self {
        Self { decoder, store }
    }

    pub async fn execute(&self, payload: &[u8]) -> IngestOutcome {
        let records = match self.decoder.decode(payload) {
            Ok(records) => records,
            Err(e) if e.is_empty_response() => return IngestOutcome::Empty,
            Err(e) => {
                trace!(error = %e, len = payload.len(), "Dropping undecodable DNS payload");
                return IngestOutcome::Rejected(e);
            }
        };

        if records.is_empty() {
            return IngestOutcome::Empty;
        }

        let count = records.len();
        let new_entries = self.store.add_records(records).await;
        trace!(records = count, new_entries, "DNS response ingested");

        IngestOutcome::Accepted {
            records: count,
            new_entries,
        }
    }
}
