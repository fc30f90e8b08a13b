use std::sync::Arc;
use tracing::{info, instrument};
use zonekeeper_domain::{
    change::NO_CHANGES, AuditLevel, BulkReport, ChangePlan, DomainError, FailedChange,
    RecordChange,
};

use crate::ports::{AuditLog, ChangeOracle, DelayStrategy, SimulatedOperation, ZoneRepository};
use crate::services::{require_zone, ZoneMutationGate};

/// Use case for applying a set of adds and updates to one zone.
///
/// Every change is processed on its own and produces exactly one audit
/// entry. Changes with missing fields fail without consulting the oracle;
/// well-formed ones are first offered to the [`ChangeOracle`], which may
/// reject them without touching the store.
pub struct BulkUpdateUseCase {
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
    oracle: Arc<dyn ChangeOracle>,
    delay: Arc<dyn DelayStrategy>,
    gate: Arc<ZoneMutationGate>,
}

impl BulkUpdateUseCase {
    pub fn new(
        zone_repo: Arc<dyn ZoneRepository>,
        audit: Arc<dyn AuditLog>,
        oracle: Arc<dyn ChangeOracle>,
        delay: Arc<dyn DelayStrategy>,
        gate: Arc<ZoneMutationGate>,
    ) -> Self {
        Self {
            zone_repo,
            audit,
            oracle,
            delay,
            gate,
        }
    }

    /// # Errors
    ///
    /// * `DomainError::Validation` - `changes` is empty
    /// * `DomainError::ZoneNotFound` - The zone is not in the store
    #[instrument(skip(self, changes), fields(changes = changes.len()))]
    pub async fn execute(
        &self,
        zone: &str,
        changes: Vec<RecordChange>,
    ) -> Result<BulkReport, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::Validation(NO_CHANGES.to_string()));
        }

        let _guard = self.gate.acquire().await;
        require_zone(
            self.zone_repo.as_ref(),
            self.audit.as_ref(),
            zone,
            "bulk update",
        )
        .await?;

        let mut report = BulkReport::default();

        for change in changes {
            match self.apply(zone, &change).await {
                Ok(()) => report.success_count += 1,
                Err(error) => report.failed.push(FailedChange { change, error }),
            }
        }

        info!(
            succeeded = report.success_count,
            failed = report.failed.len(),
            "Bulk update finished"
        );

        Ok(report)
    }

    async fn apply(&self, zone: &str, change: &RecordChange) -> Result<(), DomainError> {
        let plan = match change.plan() {
            Ok(plan) => plan,
            Err(e) => {
                self.audit
                    .record(
                        AuditLevel::Error,
                        format!(
                            "Bulk change rejected (missing data): {} {} in {}",
                            change.hostname.as_deref().unwrap_or("-"),
                            change.record_type.as_deref().unwrap_or("-"),
                            zone
                        ),
                        None,
                    )
                    .await;
                return Err(e);
            }
        };

        self.delay.pause(SimulatedOperation::BulkChange).await;

        if self.oracle.should_fail() {
            let subject = match &plan {
                ChangePlan::Add(record) => format!("{} {}", record.hostname, record.record_type),
                ChangePlan::Update { key, .. } => format!("{} {}", key.hostname, key.record_type),
            };
            self.audit
                .record(
                    AuditLevel::Error,
                    format!("Bulk update failed (simulated): {} in {}", subject, zone),
                    None,
                )
                .await;
            return Err(DomainError::SimulatedFailure);
        }

        match plan {
            ChangePlan::Add(record) => {
                let message = format!("Bulk added record: {} in {}", record, zone);
                self.zone_repo.append(zone, record).await?;
                self.audit.record(AuditLevel::Info, message, None).await;
                Ok(())
            }
            ChangePlan::Update { key, new_value } => {
                if self.zone_repo.update_first(zone, &key, &new_value).await? {
                    self.audit
                        .record(
                            AuditLevel::Info,
                            format!("Bulk updated record: {} -> {} in {}", key, new_value, zone),
                            None,
                        )
                        .await;
                    Ok(())
                } else {
                    self.audit
                        .record(
                            AuditLevel::Error,
                            format!(
                                "Bulk update failed (record not found): {} -> {} in {}",
                                key, new_value, zone
                            ),
                            None,
                        )
                        .await;
                    Err(DomainError::UpdateTargetNotFound)
                }
            }
        }
    }
}
