//! Report Module
//!
//! In-memory result of one collection run.

use serde::Serialize;

/// Memory footprint of a single key
///
/// Field names double as the CSV column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMemoryRecord {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Memory Usage (bytes)")]
    pub bytes_used: u64,
}

impl KeyMemoryRecord {
    pub fn new(key: impl Into<String>, bytes_used: u64) -> Self {
        Self {
            key: key.into(),
            bytes_used,
        }
    }
}

/// Ordered collection of per-key records
///
/// Order is the order keys were returned by the store's listing call.
/// Keys that failed or vanished are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryReport {
    records: Vec<KeyMemoryRecord>,
}

impl MemoryReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn push(&mut self, record: KeyMemoryRecord) {
        self.records.push(record);
    }

    /// Number of retained keys
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyMemoryRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[KeyMemoryRecord] {
        &self.records
    }

    /// Sum of all byte counts, saturating at `u64::MAX`
    pub fn total_bytes(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.bytes_used))
    }
}

impl FromIterator<KeyMemoryRecord> for MemoryReport {
    fn from_iter<I: IntoIterator<Item = KeyMemoryRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MemoryReport {
    type Item = &'a KeyMemoryRecord;
    type IntoIter = std::slice::Iter<'a, KeyMemoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
