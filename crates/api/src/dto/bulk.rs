use serde::{Deserialize, Serialize};
use zonekeeper_domain::{BulkReport, FailedChange, RecordChange};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkUpdateRequest {
    #[serde(default)]
    pub changes: Vec<RecordChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedChangeResponse {
    pub change: RecordChange,
    pub error: String,
}

impl From<FailedChange> for FailedChangeResponse {
    fn from(f: FailedChange) -> Self {
        Self {
            change: f.change,
            error: f.error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub message: String,
    pub success_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_changes: Vec<FailedChangeResponse>,
}

impl From<BulkReport> for BulkUpdateResponse {
    fn from(report: BulkReport) -> Self {
        let message = if report.failed.is_empty() {
            format!(
                "All {} bulk changes applied successfully",
                report.success_count
            )
        } else {
            format!(
                "Completed bulk update. {} succeeded, {} failed.",
                report.success_count,
                report.failed.len()
            )
        };

        Self {
            message,
            success_count: report.success_count,
            failed_changes: report.failed.into_iter().map(Into::into).collect(),
        }
    }
}
