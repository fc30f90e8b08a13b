use std::sync::Arc;
use tracing::{info, instrument, warn};
use zonekeeper_domain::{AuditLevel, DomainError, RecordUpdate};

use crate::ports::{AuditLog, DelayStrategy, SimulatedOperation, ZoneRepository};
use crate::services::{require_zone, ZoneMutationGate};

/// Use case for rewriting the value of one record.
///
/// Only the first record matching `(hostname, type, old_value)` changes;
/// duplicates after it keep their old value.
pub struct UpdateRecordUseCase {
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
    delay: Arc<dyn DelayStrategy>,
    gate: Arc<ZoneMutationGate>,
}

impl UpdateRecordUseCase {
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
    /// * `DomainError::RecordNotFound` - No record matches the old triple
    #[instrument(skip(self))]
    pub async fn execute(&self, zone: &str, update: RecordUpdate) -> Result<(), DomainError> {
        let (key, new_value) = update.validate()?;

        let _guard = self.gate.acquire().await;
        require_zone(
            self.zone_repo.as_ref(),
            self.audit.as_ref(),
            zone,
            "update a record in",
        )
        .await?;

        self.delay.pause(SimulatedOperation::Write).await;

        if !self.zone_repo.update_first(zone, &key, &new_value).await? {
            self.audit
                .record(
                    AuditLevel::Error,
                    format!("Record not found for update: {} in {}", key, zone),
                    None,
                )
                .await;
            warn!(record = %key, "Record not found for update");
            return Err(DomainError::RecordNotFound(key.to_string()));
        }

        self.audit
            .record(
                AuditLevel::Info,
                format!("Updated record: {} -> {} in {}", key, new_value, zone),
                None,
            )
            .await;
        info!(record = %key, new_value = %new_value, "Record updated");

        Ok(())
    }
}
