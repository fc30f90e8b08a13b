use std::sync::Arc;
use tracing::{info, instrument};
use zonekeeper_domain::{
    change::NO_RECORDS_TO_DELETE, AuditLevel, DeletionReport, DomainError, FailedDeletion,
    RecordKey,
};

use crate::ports::{AuditLog, DelayStrategy, SimulatedOperation, ZoneRepository};
use crate::services::{require_zone, ZoneMutationGate};

/// Use case for deleting a batch of records.
///
/// Each requested key removes every matching record. A key that removes
/// nothing is reported in the returned report rather than failing the batch.
pub struct DeleteRecordsUseCase {
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
    delay: Arc<dyn DelayStrategy>,
    gate: Arc<ZoneMutationGate>,
}

impl DeleteRecordsUseCase {
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
    /// * `DomainError::Validation` - `keys` is empty
    /// * `DomainError::ZoneNotFound` - The zone is not in the store
    #[instrument(skip(self, keys), fields(requested = keys.len()))]
    pub async fn execute(
        &self,
        zone: &str,
        keys: Vec<RecordKey>,
    ) -> Result<DeletionReport, DomainError> {
        if keys.is_empty() {
            return Err(DomainError::Validation(NO_RECORDS_TO_DELETE.to_string()));
        }

        let _guard = self.gate.acquire().await;
        require_zone(
            self.zone_repo.as_ref(),
            self.audit.as_ref(),
            zone,
            "delete records from",
        )
        .await?;

        let mut report = DeletionReport::default();

        for key in keys {
            self.delay.pause(SimulatedOperation::Delete).await;

            if self.zone_repo.remove_all(zone, &key).await? > 0 {
                report.deleted_count += 1;
                self.audit
                    .record(
                        AuditLevel::Info,
                        format!("Deleted record: {} in {}", key, zone),
                        None,
                    )
                    .await;
            } else {
                self.audit
                    .record(
                        AuditLevel::Error,
                        format!("Failed to delete record: {} in {}", key, zone),
                        None,
                    )
                    .await;
                report.failed.push(FailedDeletion {
                    record: key,
                    error: DomainError::DeletionFailed,
                });
            }
        }

        info!(
            deleted = report.deleted_count,
            failed = report.failed.len(),
            "Delete batch finished"
        );

        Ok(report)
    }
}
