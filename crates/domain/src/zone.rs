use crate::{DnsRecord, RecordFilter, RecordKey};
use serde::{Deserialize, Serialize};

/// A DNS zone and its records in insertion order.
///
/// Insertion order is the only ordering; there is no secondary index, so every
/// lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub records: Vec<DnsRecord>,
}

impl Zone {
    pub fn new(name: impl Into<String>, records: Vec<DnsRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing `filter`, in stored order.
    pub fn filtered(&self, filter: &RecordFilter) -> Vec<DnsRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Appends without any duplicate check.
    pub fn append(&mut self, record: DnsRecord) {
        self.records.push(record);
    }

    /// Rewrites the value of the first record matching `key`.
    ///
    /// Later duplicates are left untouched. Returns whether a record matched.
    pub fn update_first(&mut self, key: &RecordKey, new_value: &str) -> bool {
        match self.records.iter_mut().find(|r| key.matches(r)) {
            Some(record) => {
                record.value = new_value.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes every record matching `key`, returning how many were removed.
    pub fn remove_all(&mut self, key: &RecordKey) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !key.matches(r));
        before - self.records.len()
    }
}
