use super::{DnsRecord, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact identity of a record within a zone, used to locate records for
/// update and delete. Matching is case-sensitive on all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordKey {
    pub hostname: String,
    pub record_type: RecordType,
    pub value: String,
}

impl RecordKey {
    pub fn new(
        hostname: impl Into<String>,
        record_type: impl Into<RecordType>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            record_type: record_type.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &DnsRecord) -> bool {
        record.hostname == self.hostname
            && record.record_type == self.record_type
            && record.value == self.value
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hostname, self.record_type, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_triple_only() {
        let record = DnsRecord::new("www", "A", "192.168.1.100");

        assert!(RecordKey::new("www", "A", "192.168.1.100").matches(&record));
        assert!(!RecordKey::new("www", "A", "192.168.1.101").matches(&record));
        assert!(!RecordKey::new("www", "AAAA", "192.168.1.100").matches(&record));
        assert!(!RecordKey::new("web", "A", "192.168.1.100").matches(&record));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let record = DnsRecord::new("www", "A", "192.168.1.100");
        assert!(!RecordKey::new("WWW", "A", "192.168.1.100").matches(&record));
    }
}
