use serde::{Deserialize, Serialize};
use zonekeeper_domain::{DeletionReport, DnsRecord, FailedDeletion, RecordKey};

/// Query string for listing records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsQuery {
    pub record_type: Option<String>,
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecordResponse {
    pub message: String,
    pub record: DnsRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One record to delete, as sent by the client.
///
/// Absent fields never match a stored record, so such an entry ends up in
/// `failed_deletions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordKeyPayload {
    pub hostname: Option<String>,
    pub record_type: Option<String>,
    pub value: Option<String>,
}

impl From<RecordKeyPayload> for RecordKey {
    fn from(p: RecordKeyPayload) -> Self {
        RecordKey::new(
            p.hostname.unwrap_or_default(),
            p.record_type.unwrap_or_default(),
            p.value.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRecordsRequest {
    #[serde(default)]
    pub records: Vec<RecordKeyPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedDeletionResponse {
    pub record: RecordKey,
    pub error: String,
}

impl From<FailedDeletion> for FailedDeletionResponse {
    fn from(f: FailedDeletion) -> Self {
        Self {
            record: f.record,
            error: f.error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRecordsResponse {
    pub message: String,
    pub deleted_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_deletions: Vec<FailedDeletionResponse>,
}

impl From<DeletionReport> for DeleteRecordsResponse {
    fn from(report: DeletionReport) -> Self {
        let message = if report.failed.is_empty() {
            format!("Successfully deleted {} records", report.deleted_count)
        } else {
            format!(
                "Deleted {} records, but some failed.",
                report.deleted_count
            )
        };

        Self {
            message,
            deleted_count: report.deleted_count,
            failed_deletions: report.failed.into_iter().map(Into::into).collect(),
        }
    }
}
