use serde::{Deserialize, Serialize};
use zonekeeper_domain::AuditEntry;

/// Audit trail rendered as display lines, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogsResponse {
    pub logs: Vec<String>,
}

impl From<Vec<AuditEntry>> for AuditLogsResponse {
    fn from(entries: Vec<AuditEntry>) -> Self {
        Self {
            logs: entries.iter().map(ToString::to_string).collect(),
        }
    }
}
