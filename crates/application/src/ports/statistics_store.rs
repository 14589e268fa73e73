use async_trait::async_trait;
use dns_export_domain::{AnswerRecord, StatRecord};

#[async_trait]
pub trait StatisticsStore: Send + Sync {
    /// Folds records into the table, returning how many new entries were created.
    async fn add_records(&self, records: Vec<AnswerRecord>) -> usize;

    /// Copy of the table in first-seen order.
    async fn snapshot(&self) -> Vec<StatRecord>;

    /// Empties the table, handing back what it held.
    async fn drain(&self) -> Vec<StatRecord>;

    /// Merges previously drained entries back, adding their counts.
    async fn restore(&self, records: Vec<StatRecord>);

    async fn len(&self) -> usize;
}
