use super::record::HandRecord;
use std::collections::VecDeque;

/// Bounded log of completed decisions. Once full, each push evicts the
/// oldest record.
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<HandRecord>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(crate::HISTORY_CAPACITY)),
            capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn push(&mut self, record: HandRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }
    /// oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HandRecord> {
        self.records.iter()
    }
    /// One JSON object per line, oldest first.
    pub fn to_json_lines(&self) -> anyhow::Result<String> {
        let mut lines = String::new();
        for record in self.records.iter() {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }
        Ok(lines)
    }
}
