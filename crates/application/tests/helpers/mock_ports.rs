#![allow(dead_code)]

use async_trait::async_trait;
use dns_export_application::ports::{
    DnsResponseDecoder, ExportReport, StatisticsExporter, StatisticsStore,
};
use dns_export_application::services::StatisticsAggregator;
use dns_export_domain::{
    AnswerHeader, AnswerRecord, DecodeError, DomainError, StatRecord,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn make_answer(domain: &str, record_type: u16, data: &str) -> AnswerRecord {
    AnswerRecord::new(
        AnswerHeader {
            name_offset: 12,
            record_type,
            class: 1,
            ttl: 300,
            data_len: 4,
        },
        domain.to_string(),
        data.to_string(),
    )
}

/// Decoder that answers from a table keyed by the payload bytes.
#[derive(Default)]
pub struct MockDecoder {
    responses: std::sync::Mutex<HashMap<Vec<u8>, Result<Vec<AnswerRecord>, DecodeError>>>,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, payload: &[u8], records: Vec<AnswerRecord>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(payload.to_vec(), Ok(records));
        self
    }

    pub fn with_error(self, payload: &[u8], error: DecodeError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(payload.to_vec(), Err(error));
        self
    }
}

impl DnsResponseDecoder for MockDecoder {
    fn decode(&self, message: &[u8]) -> Result<Vec<AnswerRecord>, DecodeError> {
        self.responses
            .lock()
            .unwrap()
            .get(message)
            .cloned()
            .unwrap_or(Err(DecodeError::NotAResponse))
    }
}

#[derive(Default)]
pub struct MockStatisticsStore {
    table: Mutex<StatisticsAggregator>,
}

impl MockStatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count_of(&self, domain: &str, data: &str) -> Option<u64> {
        self.table
            .lock()
            .await
            .records()
            .iter()
            .find(|r| r.answer.domain == domain && r.answer.data == data)
            .map(|r| r.count)
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

/// Exporter that remembers every line it was asked to send.
#[derive(Clone, Default)]
pub struct MockExporter {
    lines: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
    partial: Arc<Mutex<Option<(Vec<usize>, Option<String>)>>>,
}

impl MockExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().await = fail;
    }

    /// Fails the given batch positions; `aborted` marks the batch as cut short.
    pub async fn set_partial(&self, undelivered: Vec<usize>, aborted: Option<&str>) {
        *self.partial.lock().await = Some((undelivered, aborted.map(str::to_string)));
    }

    pub async fn lines(&self) -> Vec<String> {
        self.lines.lock().await.clone()
    }
}

#[async_trait]
impl StatisticsExporter for MockExporter {
    async fn export(&self, records: &[StatRecord]) -> Result<ExportReport, DomainError> {
        if *self.should_fail.lock().await {
            return Err(DomainError::ExportFailed {
                target: self.target(),
                reason: "collector unreachable".to_string(),
            });
        }
        let partial = self.partial.lock().await.clone();
        let mut lines = self.lines.lock().await;
        let Some((undelivered, aborted)) = partial else {
            lines.extend(records.iter().map(StatRecord::to_line));
            return Ok(ExportReport::delivered(records.len()));
        };

        lines.extend(
            records
                .iter()
                .enumerate()
                .filter(|(i, _)| !undelivered.contains(i))
                .map(|(_, r)| r.to_line()),
        );
        Ok(ExportReport {
            sent: records.len() - undelivered.len(),
            undelivered,
            aborted,
        })
    }

    fn target(&self) -> String {
        "mock".to_string()
    }
}
