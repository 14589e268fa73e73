#![allow(dead_code)]

use async_trait::async_trait;
use dns_export_application::ports::{ExportReport, StatisticsExporter, StatisticsStore};
use dns_export_application::services::StatisticsAggregator;
use dns_export_application::use_cases::ExportStatisticsUseCase;
use dns_export_domain::{AnswerHeader, AnswerRecord, DomainError, StatRecord};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn make_answer(domain: &str, data: &str) -> AnswerRecord {
    AnswerRecord::new(
        AnswerHeader {
            name_offset: 12,
            record_type: 1,
            class: 1,
            ttl: 300,
            data_len: 4,
        },
        domain.to_string(),
        data.to_string(),
    )
}

#[derive(Default)]
pub struct MockStatisticsStore {
    table: Mutex<StatisticsAggregator>,
}

impl MockStatisticsStore {
    pub async fn with_answers(answers: Vec<AnswerRecord>) -> Self {
        let store = Self::default();
        store.add_records(answers).await;
        store
    }
}

#[async_trait]
impl StatisticsStore for MockStatisticsStore {
    async fn add_records(&self, records: Vec<AnswerRecord>) -> usize {
        self.table.lock().await.add_all(records)
    }

    async fn snapshot(&self) -> Vec<StatRecord> {
        self.table.lock().await.records().to_vec()
    }

    async fn drain(&self) -> Vec<StatRecord> {
        self.table.lock().await.take()
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

#[derive(Default)]
pub struct MockExporter {
    call_count: AtomicU64,
    lines_sent: AtomicU64,
    should_fail: AtomicBool,
}

impl MockExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn lines_sent(&self) -> u64 {
        self.lines_sent.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl StatisticsExporter for MockExporter {
    async fn export(&self, records: &[StatRecord]) -> Result<ExportReport, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::ExportFailed {
                target: self.target(),
                reason: "collector unreachable".to_string(),
            });
        }
        self.lines_sent
            .fetch_add(records.len() as u64, Ordering::Relaxed);
        Ok(ExportReport::delivered(records.len()))
    }

    fn target(&self) -> String {
        "mock".to_string()
    }
}

pub async fn make_export_use_case(
    exporter: Arc<MockExporter>,
    reset_on_export: bool,
) -> (Arc<ExportStatisticsUseCase>, Arc<MockStatisticsStore>) {
    let store = Arc::new(
        MockStatisticsStore::with_answers(vec![
            make_answer("example.com", "192.0.2.1"),
            make_answer("example.org", "192.0.2.2"),
        ])
        .await,
    );
    let use_case = ExportStatisticsUseCase::new(store.clone(), exporter)
        .with_reset_on_export(reset_on_export);
    (Arc::new(use_case), store)
}
