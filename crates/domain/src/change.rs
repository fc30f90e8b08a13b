use crate::validators::{non_empty, require_all};
use crate::{DnsRecord, DomainError, RecordKey};
use serde::{Deserialize, Serialize};

pub const MISSING_NEW_RECORD: &str = "Missing data for new record";
pub const MISSING_UPDATE: &str = "Missing data for record update";
pub const MISSING_CHANGE: &str = "Missing data";
pub const NO_RECORDS_TO_DELETE: &str = "No records provided for deletion";
pub const NO_CHANGES: &str = "No changes provided for bulk update";

/// Unvalidated input for adding a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub hostname: Option<String>,
    pub record_type: Option<String>,
    pub value: Option<String>,
}

impl RecordDraft {
    pub fn new(hostname: &str, record_type: &str, value: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            record_type: Some(record_type.to_string()),
            value: Some(value.to_string()),
        }
    }

    pub fn validate(&self) -> Result<DnsRecord, DomainError> {
        let [hostname, record_type, value] = require_all([
            self.hostname.as_deref(),
            self.record_type.as_deref(),
            self.value.as_deref(),
        ])
        .ok_or_else(|| DomainError::Validation(MISSING_NEW_RECORD.to_string()))?;

        Ok(DnsRecord::new(hostname, record_type, value))
    }
}

/// Unvalidated input for a single in-place value update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub hostname: Option<String>,
    pub record_type: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl RecordUpdate {
    pub fn new(hostname: &str, record_type: &str, old_value: &str, new_value: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            record_type: Some(record_type.to_string()),
            old_value: Some(old_value.to_string()),
            new_value: Some(new_value.to_string()),
        }
    }

    /// Yields the key of the record to rewrite and its new value.
    pub fn validate(&self) -> Result<(RecordKey, String), DomainError> {
        let [hostname, record_type, old_value, new_value] = require_all([
            self.hostname.as_deref(),
            self.record_type.as_deref(),
            self.old_value.as_deref(),
            self.new_value.as_deref(),
        ])
        .ok_or_else(|| DomainError::Validation(MISSING_UPDATE.to_string()))?;

        Ok((
            RecordKey::new(hostname, record_type, old_value),
            new_value.to_string(),
        ))
    }
}

/// One entry of a bulk change set: an add when `old_value` is absent,
/// otherwise a first-match update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordChange {
    pub hostname: Option<String>,
    pub record_type: Option<String>,
    pub new_value: Option<String>,
    #[serde(default)]
    pub old_value: Option<String>,
}

impl RecordChange {
    pub fn add(hostname: &str, record_type: &str, value: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            record_type: Some(record_type.to_string()),
            new_value: Some(value.to_string()),
            old_value: None,
        }
    }

    pub fn update(hostname: &str, record_type: &str, old_value: &str, new_value: &str) -> Self {
        Self {
            old_value: Some(old_value.to_string()),
            ..Self::add(hostname, record_type, new_value)
        }
    }

    pub fn plan(&self) -> Result<ChangePlan, DomainError> {
        let [hostname, record_type, new_value] = require_all([
            self.hostname.as_deref(),
            self.record_type.as_deref(),
            self.new_value.as_deref(),
        ])
        .ok_or_else(|| DomainError::Validation(MISSING_CHANGE.to_string()))?;

        Ok(match non_empty(self.old_value.as_deref()) {
            Some(old_value) => ChangePlan::Update {
                key: RecordKey::new(hostname, record_type, old_value),
                new_value: new_value.to_string(),
            },
            None => ChangePlan::Add(DnsRecord::new(hostname, record_type, new_value)),
        })
    }
}

/// Validated form of a [`RecordChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePlan {
    Add(DnsRecord),
    Update { key: RecordKey, new_value: String },
}
