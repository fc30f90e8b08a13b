use std::sync::Arc;
use tracing::{info, instrument};
use zonekeeper_domain::{AuditLevel, DnsRecord, DomainError, RecordDraft};

use crate::ports::{AuditLog, DelayStrategy, SimulatedOperation, ZoneRepository};
use crate::services::{require_zone, ZoneMutationGate};

/// Use case for appending a record to a zone.
///
/// Input is validated before the store is touched, so a rejected draft leaves
/// no audit entry. Identical records may be added repeatedly.
pub struct AddRecordUseCase {
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
    delay: Arc<dyn DelayStrategy>,
    gate: Arc<ZoneMutationGate>,
}

impl AddRecordUseCase {
    pub fn new(
        zone_repo: Arc<dyn ZoneRepository>,
        audit: Arc<dyn AuditLog>,
        delay: Arc<dyn DelayStrategy>,
        gate: Arc<ZoneMutationGate>,
    ) -> Self {
        Self {
            zone_repo,
            audit,
            delay,
            gate,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::Validation` - A field is missing or empty
    /// * `DomainError::ZoneNotFound` - The zone is not in the store
    #[instrument(skip(self))]
    pub async fn execute(&self, zone: &str, draft: RecordDraft) -> Result<DnsRecord, DomainError> {
        let record = draft.validate()?;

        let _guard = self.gate.acquire().await;
        require_zone(
            self.zone_repo.as_ref(),
            self.audit.as_ref(),
            zone,
            "add a record to",
        )
        .await?;

        self.delay.pause(SimulatedOperation::Write).await;
        self.zone_repo.append(zone, record.clone()).await?;

        self.audit
            .record(
                AuditLevel::Info,
                format!("Added record: {} in {}", record, zone),
                None,
            )
            .await;
        info!(record = %record, "Record added");

        Ok(record)
    }
}
