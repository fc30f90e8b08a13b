use std::sync::Arc;
use tracing::{debug, instrument};
use zonekeeper_domain::{AuditLevel, DnsRecord, DomainError, RecordFilter};

use crate::ports::{AuditLog, ZoneRepository};
use crate::services::require_zone;

pub struct ListRecordsUseCase {
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
}

impl ListRecordsUseCase {
    pub fn new(zone_repo: Arc<dyn ZoneRepository>, audit: Arc<dyn AuditLog>) -> Self {
        Self { zone_repo, audit }
    }

    /// Lists the records of `zone` that pass `filter`, in stored order.
    ///
    /// # Errors
    ///
    /// * `DomainError::ZoneNotFound` - The zone is not in the store
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        zone: &str,
        filter: &RecordFilter,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        require_zone(
            self.zone_repo.as_ref(),
            self.audit.as_ref(),
            zone,
            "fetch records for",
        )
        .await?;

        let records = self.zone_repo.list(zone, filter).await?;

        self.audit
            .record(
                AuditLevel::Info,
                format!(
                    "Fetched {} records for zone {} (filtered).",
                    records.len(),
                    zone
                ),
                None,
            )
            .await;
        debug!(count = records.len(), "Records listed");

        Ok(records)
    }
}
