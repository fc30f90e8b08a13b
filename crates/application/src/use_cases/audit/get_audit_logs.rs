use std::sync::Arc;
use tracing::{debug, instrument};
use zonekeeper_domain::{AuditEntry, AuditLevel};

use crate::ports::AuditLog;

/// Use case for reading the audit trail.
///
/// When `log_reads` is set the read is itself audited before the snapshot is
/// taken, so the returned entries end with "Audit logs requested." and every
/// poll grows the trail by one.
pub struct GetAuditLogsUseCase {
    audit: Arc<dyn AuditLog>,
    log_reads: bool,
}

impl GetAuditLogsUseCase {
    pub fn new(audit: Arc<dyn AuditLog>, log_reads: bool) -> Self {
        Self { audit, log_reads }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Vec<AuditEntry> {
        if self.log_reads {
            self.audit
                .record(AuditLevel::Info, "Audit logs requested.".to_string(), None)
                .await;
        }

        let entries = self.audit.entries().await;
        debug!(count = entries.len(), "Audit logs retrieved");
        entries
    }
}
