use async_trait::async_trait;
use dns_export_application::ports::StatisticsStore;
use dns_export_application::services::StatisticsAggregator;
use dns_export_domain::{AnswerRecord, StatRecord};
use tokio::sync::Mutex;
use tracing::debug;

/// Process-lifetime statistics table shared by ingest and export.
#[derive(Default)]
pub struct InMemoryStatisticsStore {
    table: Mutex<StatisticsAggregator>,
}

impl InMemoryStatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatisticsStore for InMemoryStatisticsStore {
    async fn add_records(&self, records: Vec<AnswerRecord>) -> usize {
        self.table.lock().await.add_all(records)
    }

    async fn snapshot(&self) -> Vec<StatRecord> {
        self.table.lock().await.records().to_vec()
    }

    async fn drain(&self) -> Vec<StatRecord> {
        let drained = self.table.lock().await.take();
        debug!(entries = drained.len(), "Statistics table drained");
        drained
    }

    async fn restore(&self, records: Vec<StatRecord>) {
        let mut table = self.table.lock().await;
        for record in records {
            table.merge(record);
        }
    }

    async fn len(&self) -> usize {
        self.table.lock().await.len()
    }
}
