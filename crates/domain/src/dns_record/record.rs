use super::{RecordKey, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single DNS entry inside a zone.
///
/// There is no surrogate key: a record is identified by the
/// `(hostname, record_type, value)` triple, and several records may share a
/// hostname and type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub hostname: String,
    pub record_type: RecordType,
    pub value: String,
}

impl DnsRecord {
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

    pub fn key(&self) -> RecordKey {
        RecordKey::new(
            self.hostname.clone(),
            self.record_type.clone(),
            self.value.clone(),
        )
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hostname, self.record_type, self.value)
    }
}
