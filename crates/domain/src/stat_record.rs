use crate::dns_record::AnswerRecord;
use std::fmt;

/// Deduplication key of the statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatKey {
    pub domain: String,
    pub type_tag: String,
    pub data: String,
}

impl From<&AnswerRecord> for StatKey {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            domain: record.domain.clone(),
            type_tag: record.type_tag.clone(),
            data: record.data.clone(),
        }
    }
}

/// An answer record together with how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub answer: AnswerRecord,
    pub count: u64,
}

impl StatRecord {
    pub fn new(answer: AnswerRecord) -> Self {
        Self { answer, count: 1 }
    }

    pub fn key(&self) -> StatKey {
        StatKey::from(&self.answer)
    }

    /// Body line sent to the collector: `domain type data count`.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.answer.domain, self.answer.type_tag, self.answer.data, self.count
        )
    }
}
