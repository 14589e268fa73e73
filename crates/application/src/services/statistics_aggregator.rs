use dns_export_domain::{AnswerRecord, StatKey, StatRecord};
use rustc_hash::FxHashMap;

/// Deduplicating counter over (domain, type tag, answer data).
///
/// Entries keep first-seen order; the hash index only maps a key to its
/// position in `records`.
#[derive(Debug, Default)]
pub struct StatisticsAggregator {
    records: Vec<StatRecord>,
    index: FxHashMap<StatKey, usize>,
}

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the record created a new entry.
    pub fn add(&mut self, record: AnswerRecord) -> bool {
        let key = StatKey::from(&record);
        if let Some(&position) = self.index.get(&key) {
            self.records[position].count += 1;
            return false;
        }
        self.index.insert(key, self.records.len());
        self.records.push(StatRecord::new(record));
        true
    }

    pub fn add_all(&mut self, records: impl IntoIterator<Item = AnswerRecord>) -> usize {
        let mut created = 0;
        for record in records {
            if self.add(record) {
                created += 1;
            }
        }
        created
    }

    /// Adds a whole entry, summing counts with an existing one.
    pub fn merge(&mut self, stat: StatRecord) {
        let key = stat.key();
        match self.index.get(&key) {
            Some(&position) => self.records[position].count += stat.count,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(stat);
            }
        }
    }

    pub fn records(&self) -> &[StatRecord] {
        &self.records
    }

    pub fn take(&mut self) -> Vec<StatRecord> {
        self.index.clear();
        std::mem::take(&mut self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
